//! JSON codec for drawings.
//!
//! The file format is a bare array of strokes:
//!
//! ```json
//! [{"strokeOrder":0,"pixels":[{"startX":10,"startY":10,"endX":20,"endY":20}]}]
//! ```
//!
//! Import accepts integer or floating point coordinates and tolerates a missing
//! `strokeOrder`; anything without a `pixels` array of segments is rejected.

use super::types::{ExportError, ImportError};
use crate::draw::Drawing;

/// Serializes a drawing to its compact JSON form.
pub fn encode_drawing(drawing: &Drawing) -> Result<String, ExportError> {
    Ok(serde_json::to_string(drawing)?)
}

/// Parses drawing JSON. Nothing is returned unless the whole document is valid.
pub fn decode_drawing(contents: &str) -> Result<Drawing, ImportError> {
    Ok(serde_json::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, Segment, Stroke};

    const TWO_STROKES: &str = r#"[{"strokeOrder":0,"pixels":[{"startX":10,"startY":10,"endX":20,"endY":20}]},{"strokeOrder":1,"pixels":[{"startX":30,"startY":30,"endX":40,"endY":40}]}]"#;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::between(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn decodes_integer_coordinates() {
        let drawing = decode_drawing(TWO_STROKES).unwrap();
        assert_eq!(drawing.len(), 2);
        assert_eq!(drawing.strokes()[0].segments, vec![line(10.0, 10.0, 20.0, 20.0)]);
        assert_eq!(drawing.strokes()[1].stroke_order, 1);
        assert_eq!(drawing.strokes()[1].segments, vec![line(30.0, 30.0, 40.0, 40.0)]);
    }

    #[test]
    fn encode_then_decode_preserves_fractional_values() {
        let mut stroke = Stroke::new(0);
        stroke.push(line(0.1, 0.2, 123.456, 7.000001));
        stroke.push(line(123.456, 7.000001, -3.5, 1e-9));
        let drawing = Drawing::from_strokes(vec![stroke, Stroke::new(1)]);

        let json = encode_drawing(&drawing).unwrap();
        assert_eq!(decode_drawing(&json).unwrap(), drawing);
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            decode_drawing("not json at all"),
            Err(ImportError::Parse(_))
        ));
    }

    #[test]
    fn rejects_strokes_without_pixels() {
        assert!(decode_drawing(r#"[{"strokeOrder":0}]"#).is_err());
        assert!(decode_drawing(r#"{"strokeOrder":0,"pixels":[]}"#).is_err());
        assert!(decode_drawing(r#"[{"pixels":[{"startX":"a","startY":0,"endX":0,"endY":0}]}]"#).is_err());
    }

    #[test]
    fn empty_array_is_an_empty_drawing() {
        assert!(decode_drawing("[]").unwrap().is_empty());
    }
}
