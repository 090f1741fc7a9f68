use crate::board::model::Stroke;

/// Linear undo stack of committed strokes. Insertion order is draw order;
/// undo pops the most recent stroke and discards it (no redo).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
