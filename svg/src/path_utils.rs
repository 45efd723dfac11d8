use crate::parser::PathParser;
use crate::path::{Polyline, PolylineBuilder};

/// Interprets a path-data string into polylines, one per pen-down run.
///
/// This is the front door of the compiler core: parsing and interpretation
/// never fail, malformed trailing data is silently truncated.
///
/// # Examples
///
/// ```
/// use plume_svg::build_polylines;
///
/// let polylines = build_polylines("M 0 0 L 10 0 L 10 10 z");
/// assert_eq!(polylines.len(), 1);
/// assert_eq!(polylines[0].points.len(), 4);
/// ```
pub fn build_polylines(src: &str) -> Vec<Polyline> {
    let mut builder = PolylineBuilder::new();
    for event in PathParser::new(src) {
        builder.svg_event(event);
    }

    builder.build()
}

#[test]
fn trailing_pen_up() {
    // A path ending mid-stroke still ends its polyline.
    let polylines = build_polylines("M 0 0 L 10 0 L 10 10");
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].points.len(), 3);
}

#[test]
fn empty_input() {
    assert!(build_polylines("").is_empty());
    assert!(build_polylines("not a path").is_empty());
}
