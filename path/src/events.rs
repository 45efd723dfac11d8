use crate::math::{Point, Vector};

/// A path command as written in the SVG path syntax, including the relative
/// and shorthand variants.
///
/// Arc events only carry their endpoint: arcs are recognized so that the
/// parser can consume their operands, but they are never evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SvgEvent {
    MoveTo(Point),
    RelativeMoveTo(Vector),
    LineTo(Point),
    RelativeLineTo(Vector),
    HorizontalLineTo(f32),
    RelativeHorizontalLineTo(f32),
    VerticalLineTo(f32),
    RelativeVerticalLineTo(f32),
    QuadraticTo(Point, Point),
    RelativeQuadraticTo(Vector, Vector),
    CubicTo(Point, Point, Point),
    RelativeCubicTo(Vector, Vector, Vector),
    SmoothCubicTo(Point, Point),
    SmoothRelativeCubicTo(Vector, Vector),
    SmoothQuadraticTo(Point),
    SmoothRelativeQuadraticTo(Vector),
    ArcTo(Point),
    RelativeArcTo(Vector),
    Close,
}
