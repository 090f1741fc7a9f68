use eframe::egui;

use crate::board::capture::{adjusted_coords, StrokeCapture, SurfaceBox};
use crate::board::export;
use crate::board::history::StrokeHistory;
use crate::board::model::PenColor;
use crate::board::noise::NoiseOverlay;
use crate::board::surface::DrawSurface;

pub const DEFAULT_PIXELATION_FACTOR: u32 = 3;
pub const DEFAULT_NOISE_ALPHA: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub pixelation_factor: u32,
    pub noise_alpha: u8,
}

impl BoardConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixelation_factor: DEFAULT_PIXELATION_FACTOR,
            noise_alpha: DEFAULT_NOISE_ALPHA,
        }
    }
}

/// Interactive drawing board: a pixelated stroke surface under an animated
/// film-grain overlay, with color swatches, undo, and the send stub.
///
/// Both layers stretch into the same `width x height` box; the stroke
/// surface uploads with nearest-neighbor filtering so its reduced internal
/// resolution shows as chunky pixels. The grain layer is repainted every
/// display frame and never takes pointer input (it is drawn after the
/// canvas response is claimed, so all hits land on the drawing surface).
pub struct DrawingBoard {
    config: BoardConfig,
    capture: StrokeCapture,
    surface: DrawSurface,
    noise: NoiseOverlay,
    surface_dirty: bool,
    surface_tex: Option<egui::TextureHandle>,
    noise_tex: Option<egui::TextureHandle>,
}

impl DrawingBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            capture: StrokeCapture::default(),
            surface: DrawSurface::from_display(
                config.width,
                config.height,
                config.pixelation_factor,
            ),
            noise: NoiseOverlay::new(config.width, config.height, config.noise_alpha),
            surface_dirty: true,
            surface_tex: None,
            noise_tex: None,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn history(&self) -> &StrokeHistory {
        self.capture.history()
    }

    pub fn pen(&self) -> PenColor {
        self.capture.pen()
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface.size()
    }

    pub fn noise_size(&self) -> (u32, u32) {
        self.noise.size()
    }

    /// Apply a new configuration: rebuild both surfaces and drop the old
    /// textures. The old grain generator is gone before the new one exists,
    /// so there is never a second live animation loop.
    pub fn reconfigure(&mut self, config: BoardConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.surface =
            DrawSurface::from_display(config.width, config.height, config.pixelation_factor);
        self.surface.repaint(self.capture.history());
        self.noise = NoiseOverlay::new(config.width, config.height, config.noise_alpha);
        self.surface_dirty = true;
        self.surface_tex = None;
        self.noise_tex = None;
    }

    pub fn undo(&mut self) {
        let _ = self.capture.undo();
        self.surface.repaint(self.capture.history());
        self.surface_dirty = true;
    }

    pub fn send(&self) {
        export::send(self.capture.history().strokes());
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        if !self
            .noise
            .matches(self.config.width, self.config.height, self.config.noise_alpha)
        {
            self.noise =
                NoiseOverlay::new(self.config.width, self.config.height, self.config.noise_alpha);
            self.noise_tex = None;
        }

        let board_width = self.config.width as f32;
        ui.vertical(|ui| {
            ui.set_max_width(board_width);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("D R A W !").monospace().small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for &color in PenColor::ALL.iter().rev() {
                        self.swatch(ui, color);
                    }
                });
            });

            let size = egui::vec2(board_width, self.config.height as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            self.handle_pointer(&response);
            self.paint_layers(ui.ctx(), &painter, response.rect);

            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("undo").small()).clicked() {
                    self.undo();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(egui::RichText::new("send").small()).clicked() {
                        self.send();
                    }
                });
            });
        });

        // The grain layer regenerates once per display frame.
        ui.ctx().request_repaint();
    }

    fn swatch(&mut self, ui: &mut egui::Ui, color: PenColor) {
        let rgba = color.rgba();
        let fill = egui::Color32::from_rgb(rgba.r, rgba.g, rgba.b);
        let mut button = egui::Button::new("")
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, egui::Color32::BLACK))
            .min_size(egui::vec2(18.0, 18.0));
        if self.capture.pen() == color {
            button = button.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
        }
        if ui.add(button).on_hover_text(color.name()).clicked() {
            self.capture.set_pen(color);
        }
    }

    fn handle_pointer(&mut self, response: &egui::Response) {
        let bounds = Some(SurfaceBox {
            left: response.rect.left(),
            top: response.rect.top(),
            width: response.rect.width(),
            height: response.rect.height(),
        });
        let surface_size = self.surface.size();

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                if response.rect.contains(pos) {
                    self.capture
                        .pointer_down(adjusted_coords((pos.x, pos.y), bounds, surface_size));
                }
            }
        } else if response.dragged() {
            // egui keeps the drag alive while the pointer roams outside the
            // rect; out-of-bounds samples are dropped, not committed.
            let sample = response
                .interact_pointer_pos()
                .filter(|pos| response.rect.contains(*pos))
                .map(|pos| adjusted_coords((pos.x, pos.y), bounds, surface_size));
            let color = self.capture.active_color();
            if let (Some((from, to)), Some(color)) = (self.capture.pointer_move(sample), color) {
                self.surface.paint_segment(from, to, color.rgba());
                self.surface_dirty = true;
            }
        }

        // Fires on release anywhere and on pointer loss (window blur,
        // PointerGone): the open stroke is committed, not discarded.
        if response.drag_stopped() && self.capture.is_drawing() {
            self.capture.pointer_up();
        }
    }

    fn paint_layers(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        if self.surface_dirty || self.surface_tex.is_none() {
            let (w, h) = self.surface.size();
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [w as usize, h as usize],
                self.surface.pixels(),
            );
            match &mut self.surface_tex {
                Some(tex) => tex.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.surface_tex =
                        Some(ctx.load_texture("drawing_surface", image, egui::TextureOptions::NEAREST))
                }
            }
            self.surface_dirty = false;
        }

        self.noise.regenerate();
        let (nw, nh) = self.noise.size();
        let noise_image = egui::ColorImage::from_rgba_unmultiplied(
            [nw as usize, nh as usize],
            self.noise.pixels(),
        );
        match &mut self.noise_tex {
            Some(tex) => tex.set(noise_image, egui::TextureOptions::NEAREST),
            None => {
                self.noise_tex =
                    Some(ctx.load_texture("grain_overlay", noise_image, egui::TextureOptions::NEAREST))
            }
        }

        let uv = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
        if let Some(tex) = &self.surface_tex {
            painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
        }
        if let Some(tex) = &self.noise_tex {
            painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
        }
    }
}
