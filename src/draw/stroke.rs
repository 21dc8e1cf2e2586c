//! Segments, strokes and the pen they are drawn with.

use super::color::{BLACK, Color};
use serde::{Deserialize, Serialize};

/// A position on the drawing surface, relative to its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One straight line piece of a stroke.
///
/// Field names follow the exported file format (`startX`, `startY`, `endX`, `endY`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl Segment {
    /// Creates the segment running from `from` to `to`.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            start_x: from.x,
            start_y: from.y,
            end_x: to.x,
            end_y: to.y,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }
}

/// Every segment recorded during one continuous pointer-down-to-pointer-up gesture.
///
/// `stroke_order` is the session counter value at the time the stroke was started.
/// A stroke with no segments (a tap without movement) is valid and draws nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "strokeOrder", default)]
    pub stroke_order: u64,
    /// Serialized as `pixels` for compatibility with existing drawing files.
    #[serde(rename = "pixels")]
    pub segments: Vec<Segment>,
}

impl Stroke {
    /// Creates an empty stroke tagged with `stroke_order`.
    pub fn new(stroke_order: u64) -> Self {
        Self {
            stroke_order,
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Line appearance for rendered segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// The only pen the sketch surface draws with: solid black, 2 units wide.
pub const PEN: StrokeStyle = StrokeStyle {
    color: BLACK,
    width: 2.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_uses_file_format_field_names() {
        let segment = Segment::between(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        let json = serde_json::to_string(&segment).unwrap();
        assert_eq!(
            json,
            r#"{"startX":10.0,"startY":10.0,"endX":20.0,"endY":20.0}"#
        );
    }

    #[test]
    fn stroke_serializes_segments_as_pixels() {
        let mut stroke = Stroke::new(3);
        stroke.push(Segment::between(Point::new(1.5, 2.0), Point::new(3.0, 4.25)));

        let value = serde_json::to_value(&stroke).unwrap();
        assert_eq!(value["strokeOrder"], 3);
        assert_eq!(value["pixels"][0]["startX"], 1.5);
        assert_eq!(value["pixels"][0]["endY"], 4.25);
    }

    #[test]
    fn stroke_order_defaults_when_missing() {
        let stroke: Stroke =
            serde_json::from_str(r#"{"pixels":[{"startX":0,"startY":0,"endX":1,"endY":1}]}"#)
                .unwrap();
        assert_eq!(stroke.stroke_order, 0);
        assert_eq!(stroke.segments.len(), 1);
        assert_eq!(stroke.segments[0].end(), Point::new(1.0, 1.0));
    }

    #[test]
    fn pen_is_black_two_units() {
        assert_eq!(PEN.color, BLACK);
        assert_eq!(PEN.width, 2.0);
    }
}
