//! Cairo-based rendering functions for segments.

use super::color::Color;
use super::stroke::{Segment, StrokeStyle};

/// Fills the entire target with a solid background color.
///
/// Should be called after clearing the canvas but before rendering segments.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous pixels
    let _ = ctx.restore();
}

/// Renders a single segment as a straight line.
///
/// Uses butt caps so consecutive segments of a stroke meet without
/// overdrawing past their end points.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment, style: &StrokeStyle) {
    style.color.apply(ctx);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Butt);

    let (start, end) = (segment.start(), segment.end());
    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}
