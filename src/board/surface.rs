use crate::board::history::StrokeHistory;
use crate::board::model::{Point, Rgba};

/// Fixed pen width in surface pixels. Segments are stamped with a round
/// brush, so caps and joins come out rounded.
pub const STROKE_WIDTH: u32 = 2;

/// RGBA8 pixel buffer for the drawing surface. Its internal resolution is
/// the display size divided by the pixelation factor; the widget stretches
/// it back up with nearest-neighbor filtering for the chunky look.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DrawSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn from_display(display_width: u32, display_height: u32, pixelation_factor: u32) -> Self {
        let factor = pixelation_factor.max(1);
        Self::new(
            (display_width / factor).max(1),
            (display_height / factor).max(1),
        )
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = ((y * self.width + x) * 4) as usize;
        Rgba {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
            a: self.pixels[idx + 3],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Full repaint: clear, then replay history in commit order. Strokes
    /// with fewer than two points have no segments and draw nothing.
    pub fn repaint(&mut self, history: &StrokeHistory) {
        self.clear();
        for stroke in history.strokes() {
            if stroke.points.len() < 2 {
                continue;
            }
            let color = stroke.color.rgba();
            for segment in stroke.points.windows(2) {
                self.paint_segment(segment[0], segment[1], color);
            }
        }
    }

    /// Incremental paint of a single segment, without clearing. Used per
    /// pointer-move so a long drag never costs a full replay.
    pub fn paint_segment(&mut self, start: Point, end: Point, color: Rgba) {
        let mut x0 = start.x.round() as i32;
        let mut y0 = start.y.round() as i32;
        let x1 = end.x.round() as i32;
        let y1 = end.y.round() as i32;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp_brush(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn stamp_brush(&mut self, cx: i32, cy: i32, color: Rgba) {
        let radius = (STROKE_WIDTH / 2) as i32;
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                if ox * ox + oy * oy > radius * radius {
                    continue;
                }
                self.set_pixel(cx + ox, cy + oy, color);
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
        self.pixels[idx + 3] = color.a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::{PenColor, Stroke};

    #[test]
    fn display_size_is_divided_and_floored() {
        let surface = DrawSurface::from_display(250, 250, 3);
        assert_eq!(surface.size(), (83, 83));
    }

    #[test]
    fn surface_never_collapses_below_one_pixel() {
        let surface = DrawSurface::from_display(2, 2, 10);
        assert_eq!(surface.size(), (1, 1));
    }

    #[test]
    fn single_point_strokes_render_nothing_on_repaint() {
        let mut history = StrokeHistory::default();
        history.commit(Stroke::begin(PenColor::Red, Point::new(5.0, 5.0)));

        let mut surface = DrawSurface::new(16, 16);
        surface.repaint(&history);
        assert!(surface.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn repaint_is_pixel_identical_across_calls() {
        let mut history = StrokeHistory::default();
        history.commit(Stroke {
            color: PenColor::Blue,
            points: vec![Point::new(2.0, 2.0), Point::new(12.0, 9.0), Point::new(4.0, 13.0)],
        });

        let mut surface = DrawSurface::new(16, 16);
        surface.repaint(&history);
        let first = surface.pixels().to_vec();
        surface.repaint(&history);
        assert_eq!(surface.pixels(), first.as_slice());
    }

    #[test]
    fn segment_paint_touches_both_endpoints() {
        let mut surface = DrawSurface::new(16, 16);
        surface.paint_segment(Point::new(3.0, 3.0), Point::new(10.0, 3.0), PenColor::Green.rgba());
        assert_eq!(surface.pixel(3, 3), PenColor::Green.rgba());
        assert_eq!(surface.pixel(10, 3), PenColor::Green.rgba());
        assert_eq!(surface.pixel(3, 12), Rgba::TRANSPARENT);
    }

    #[test]
    fn out_of_range_stamps_are_skipped() {
        let mut surface = DrawSurface::new(4, 4);
        surface.paint_segment(Point::new(-5.0, -5.0), Point::new(8.0, 8.0), PenColor::Red.rgba());
        // Diagonal crosses the buffer; nothing panicked and the in-range
        // part was painted.
        assert_eq!(surface.pixel(1, 1), PenColor::Red.rgba());
    }

    #[test]
    fn repaint_after_undo_drops_only_the_last_stroke_pixels() {
        let mut history = StrokeHistory::default();
        history.commit(Stroke {
            color: PenColor::Red,
            points: vec![Point::new(1.0, 1.0), Point::new(6.0, 1.0)],
        });
        history.commit(Stroke {
            color: PenColor::Blue,
            points: vec![Point::new(1.0, 10.0), Point::new(6.0, 10.0)],
        });

        let mut surface = DrawSurface::new(16, 16);
        surface.repaint(&history);
        assert_eq!(surface.pixel(3, 10), PenColor::Blue.rgba());

        let _ = history.undo();
        surface.repaint(&history);
        assert_eq!(surface.pixel(3, 10), Rgba::TRANSPARENT);
        assert_eq!(surface.pixel(3, 1), PenColor::Red.rgba());
    }
}
