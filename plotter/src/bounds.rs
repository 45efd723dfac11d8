//! Bounding rectangle computation for element trees.

use crate::element::{Element, ElementKind};
use crate::math::{point, Point, Rect};
use crate::svg::build_polylines;

/// Computes the axis-aligned rectangle containing every drawable element of
/// the document, or `None` when nothing is drawable.
///
/// Hidden elements, fully transparent elements and `pin`-marked elements do
/// not contribute. Bounds are computed from the untransformed element
/// attributes, which is what the auto-fit derivation expects.
pub fn document_bounds(elements: &[Element]) -> Option<Rect> {
    let mut bounds = None;
    for element in elements {
        if !element.is_drawable() {
            continue;
        }
        bounds = union(bounds, element_bounds(element));
    }

    bounds
}

/// The bounding rectangle of a single element, `None` for empty geometry.
pub fn element_bounds(element: &Element) -> Option<Rect> {
    match element.kind {
        ElementKind::Path { ref data } => path_bounds(data),
        ElementKind::Circle { center, radius } => Some(Rect::new(
            point(center.x - radius, center.y - radius),
            crate::math::size(radius * 2.0, radius * 2.0),
        )),
        ElementKind::Rect { origin, size } => Some(Rect::new(origin, size)),
        ElementKind::Line { from, to } => min_max_rect(&[from, to]),
        ElementKind::Polyline { ref points } | ElementKind::Polygon { ref points } => {
            min_max_rect(points)
        }
        ElementKind::Group { ref children } => document_bounds(children),
    }
}

/// The bounding rectangle of a path-data string, computed over the
/// interpreted polyline points so that curve extents match what the
/// compiler will actually draw.
pub fn path_bounds(data: &str) -> Option<Rect> {
    let polylines = build_polylines(data);
    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);

    for polyline in &polylines {
        for p in &polyline.points {
            min = Point::min(min, *p);
            max = Point::max(max, *p);
        }
    }

    if min == point(f32::MAX, f32::MAX) {
        return None;
    }

    Some(Rect::new(min, (max - min).to_size()))
}

fn min_max_rect(points: &[Point]) -> Option<Rect> {
    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);

    for p in points {
        min = Point::min(min, *p);
        max = Point::max(max, *p);
    }

    if min == point(f32::MAX, f32::MAX) {
        return None;
    }

    Some(Rect::new(min, (max - min).to_size()))
}

// Not Rect::union: euclid treats zero-area rectangles as empty and would
// drop single-point bounds such as a dot path.
fn union(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let min = point(a.origin.x.min(b.origin.x), a.origin.y.min(b.origin.y));
            let max = point(a.max_x().max(b.max_x()), a.max_y().max(b.max_y()));
            Some(Rect::new(min, (max - min).to_size()))
        }
        (a, None) => a,
        (None, b) => b,
    }
}

#[test]
fn simple_path_bounds() {
    use crate::math::rect;

    assert_eq!(path_bounds("M 0 0 L 10 0 L 10 5"), Some(rect(0.0, 0.0, 10.0, 5.0)));
    assert_eq!(path_bounds("M -5 -5 L 5 5"), Some(rect(-5.0, -5.0, 10.0, 10.0)));
    assert_eq!(path_bounds(""), None);
}

#[test]
fn document_bounds_union() {
    use crate::math::{rect, size};

    let elements = vec![
        Element::circle(point(0.0, 0.0), 2.0),
        Element::rect(point(10.0, 10.0), size(5.0, 5.0)),
    ];

    assert_eq!(document_bounds(&elements), Some(rect(-2.0, -2.0, 17.0, 17.0)));
}

#[test]
fn document_bounds_skips_hidden_and_pins() {
    use crate::math::rect;

    let elements = vec![
        Element::circle(point(0.0, 0.0), 1.0),
        Element::circle(point(100.0, 100.0), 50.0).with_hidden(true),
        Element::circle(point(-100.0, 0.0), 1.0).with_id("pin_1"),
        Element::circle(point(0.0, -100.0), 1.0).with_opacity(0.0),
    ];

    assert_eq!(document_bounds(&elements), Some(rect(-1.0, -1.0, 2.0, 2.0)));
}

#[test]
fn group_bounds_recurse() {
    use crate::math::rect;

    let group = Element::group(vec![
        Element::line(point(0.0, 0.0), point(4.0, 0.0)),
        Element::line(point(0.0, 0.0), point(0.0, 8.0)),
    ]);

    assert_eq!(document_bounds(&[group]), Some(rect(0.0, 0.0, 4.0, 8.0)));
}

#[test]
fn empty_document_bounds() {
    assert_eq!(document_bounds(&[]), None);

    let hidden = vec![Element::circle(point(0.0, 0.0), 1.0).with_hidden(true)];
    assert_eq!(document_bounds(&hidden), None);
}
