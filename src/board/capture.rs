use crate::board::history::StrokeHistory;
use crate::board::model::{PenColor, Point, Stroke};

/// On-screen bounding box of the drawing surface, in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a device-space pointer position into the surface's internal pixel
/// space. A missing or degenerate box yields the origin rather than an
/// error; the surface simply isn't there to hit.
pub fn adjusted_coords(
    device: (f32, f32),
    surface_box: Option<SurfaceBox>,
    surface_size: (u32, u32),
) -> Point {
    let Some(bounds) = surface_box else {
        return Point::ZERO;
    };
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Point::ZERO;
    }
    Point::new(
        (device.0 - bounds.left) / bounds.width * surface_size.0 as f32,
        (device.1 - bounds.top) / bounds.height * surface_size.1 as f32,
    )
}

/// Stroke capture state machine: `Idle` until a pointer-down lands inside
/// the surface, `Drawing` until pointer-up. Owns the committed history and
/// the pen color, which is read at pointer-down time only.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCapture {
    pen: PenColor,
    active: Option<Stroke>,
    history: StrokeHistory,
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self {
            pen: PenColor::Red,
            active: None,
            history: StrokeHistory::default(),
        }
    }
}

impl StrokeCapture {
    pub fn pen(&self) -> PenColor {
        self.pen
    }

    /// Takes effect for the next stroke; an in-progress stroke keeps the
    /// color it was seeded with.
    pub fn set_pen(&mut self, color: PenColor) {
        self.pen = color;
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Color the in-progress stroke was seeded with, if one is open.
    pub fn active_color(&self) -> Option<PenColor> {
        self.active.as_ref().map(|stroke| stroke.color)
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    /// Begin a stroke at an in-bounds, already-mapped point.
    pub fn pointer_down(&mut self, start: Point) {
        if self.active.is_some() {
            return;
        }
        self.active = Some(Stroke::begin(self.pen, start));
    }

    /// Feed one move sample. `None` means the pointer was outside the
    /// surface: the sample is dropped but the stroke stays open. An
    /// in-bounds sample appends and returns the new segment so the caller
    /// can paint it incrementally.
    pub fn pointer_move(&mut self, sample: Option<Point>) -> Option<(Point, Point)> {
        let stroke = self.active.as_mut()?;
        let point = sample?;
        let last = *stroke.points.last()?;
        stroke.points.push(point);
        Some((last, point))
    }

    /// End the gesture, committing the active stroke (if any) to history.
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.active.take() {
            self.history.commit(stroke);
        }
    }

    /// Pop the most recent committed stroke. Returns whether anything was
    /// removed; the caller repaints either way.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }
}
