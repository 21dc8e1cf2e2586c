//! Drawing container for the completed strokes of a sketch.

use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// All completed strokes of the current sketch.
///
/// Strokes are kept in chronological order, which is also the render order
/// (first stroke = bottom layer). Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Creates a new empty drawing.
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Wraps an already ordered list of strokes.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
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

    /// Total number of segments across every stroke.
    pub fn segment_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.segments.len()).sum()
    }

    /// Appends a completed stroke on top of the existing ones.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes and returns the most recently added stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, Segment};

    fn stroke(order: u64, segments: usize) -> Stroke {
        let mut stroke = Stroke::new(order);
        for i in 0..segments {
            let i = i as f64;
            stroke.push(Segment::between(Point::new(i, i), Point::new(i + 1.0, i + 1.0)));
        }
        stroke
    }

    #[test]
    fn undo_pops_most_recent_stroke() {
        let mut drawing = Drawing::new();
        drawing.push(stroke(0, 1));
        drawing.push(stroke(1, 2));

        let removed = drawing.undo().expect("stroke removed");
        assert_eq!(removed.stroke_order, 1);
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.strokes()[0].stroke_order, 0);
    }

    #[test]
    fn undo_on_empty_drawing_returns_none() {
        let mut drawing = Drawing::new();
        assert!(drawing.undo().is_none());
        assert!(drawing.is_empty());
    }

    #[test]
    fn segment_count_spans_all_strokes() {
        let drawing = Drawing::from_strokes(vec![stroke(0, 3), stroke(1, 0), stroke(2, 4)]);
        assert_eq!(drawing.len(), 3);
        assert_eq!(drawing.segment_count(), 7);
    }

    #[test]
    fn serializes_as_plain_array() {
        let drawing = Drawing::from_strokes(vec![stroke(0, 0)]);
        let json = serde_json::to_string(&drawing).unwrap();
        assert_eq!(json, r#"[{"strokeOrder":0,"pixels":[]}]"#);
    }
}
