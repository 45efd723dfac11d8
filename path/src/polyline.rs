//! The event-to-polyline interpreter.
//!
//! `PolylineBuilder` folds a stream of path events into pen-down runs. Each
//! run becomes one `Polyline`, which the plotter layer later turns into a
//! `down`, `move`…, `up` command sequence. The pen starts up, goes down on
//! the first drawing command, and is forced back up when the event stream
//! ends.

use crate::events::SvgEvent;
use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::{point, Point};
use crate::path_state::PathState;

/// A contiguous pen-down run of points, in the order they are drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// Interprets path events, tracking cursor and pen state, and produces one
/// polyline per pen-down run.
///
/// All points are stored unrounded; snapping to destination pixels happens
/// after transform and simplification so that rounding error does not
/// compound.
pub struct PolylineBuilder {
    state: PathState,
    done: Vec<Polyline>,
    current: Vec<Point>,
    pen_down: bool,
}

impl PolylineBuilder {
    pub fn new() -> Self {
        PolylineBuilder {
            state: PathState::new(),
            done: Vec::new(),
            current: Vec::new(),
            pen_down: false,
        }
    }

    /// The interpreter's cursor state.
    pub fn state(&self) -> &PathState { &self.state }

    pub fn svg_event(&mut self, event: SvgEvent) {
        match event {
            SvgEvent::MoveTo(to) => {
                self.move_to(to);
            }
            SvgEvent::RelativeMoveTo(to) => {
                let to = self.state.relative_to_absolute(to);
                self.move_to(to);
            }
            SvgEvent::LineTo(to) => {
                self.line_to(to);
            }
            SvgEvent::RelativeLineTo(to) => {
                let to = self.state.relative_to_absolute(to);
                self.line_to(to);
            }
            SvgEvent::HorizontalLineTo(x) => {
                let to = point(x, self.state.current_position().y);
                self.line_to(to);
            }
            SvgEvent::RelativeHorizontalLineTo(dx) => {
                let current = self.state.current_position();
                self.line_to(point(current.x + dx, current.y));
            }
            SvgEvent::VerticalLineTo(y) => {
                let to = point(self.state.current_position().x, y);
                self.line_to(to);
            }
            SvgEvent::RelativeVerticalLineTo(dy) => {
                let current = self.state.current_position();
                self.line_to(point(current.x, current.y + dy));
            }
            SvgEvent::QuadraticTo(ctrl, to) => {
                self.quadratic_bezier_to(ctrl, to);
            }
            SvgEvent::RelativeQuadraticTo(ctrl, to) => {
                let ctrl = self.state.relative_to_absolute(ctrl);
                let to = self.state.relative_to_absolute(to);
                self.quadratic_bezier_to(ctrl, to);
            }
            SvgEvent::CubicTo(ctrl1, ctrl2, to) => {
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            SvgEvent::RelativeCubicTo(ctrl1, ctrl2, to) => {
                let ctrl1 = self.state.relative_to_absolute(ctrl1);
                let ctrl2 = self.state.relative_to_absolute(ctrl2);
                let to = self.state.relative_to_absolute(to);
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            SvgEvent::SmoothCubicTo(ctrl2, to) => {
                let ctrl1 = self.state.get_smooth_cubic_ctrl();
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            SvgEvent::SmoothRelativeCubicTo(ctrl2, to) => {
                let ctrl1 = self.state.get_smooth_cubic_ctrl();
                let ctrl2 = self.state.relative_to_absolute(ctrl2);
                let to = self.state.relative_to_absolute(to);
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            SvgEvent::SmoothQuadraticTo(to) => {
                let ctrl = self.state.get_smooth_quadratic_ctrl();
                self.quadratic_bezier_to(ctrl, to);
            }
            SvgEvent::SmoothRelativeQuadraticTo(to) => {
                let ctrl = self.state.get_smooth_quadratic_ctrl();
                let to = self.state.relative_to_absolute(to);
                self.quadratic_bezier_to(ctrl, to);
            }
            // Arcs are not evaluated, only their endpoint is kept.
            SvgEvent::ArcTo(to) => {
                self.line_to(to);
            }
            SvgEvent::RelativeArcTo(to) => {
                let to = self.state.relative_to_absolute(to);
                self.line_to(to);
            }
            SvgEvent::Close => {
                self.close();
            }
        }
    }

    /// Ends the last pen-down run (an implicit pen up if the pen was still
    /// down) and returns the finished polylines.
    pub fn build(mut self) -> Vec<Polyline> {
        self.end_polyline();
        self.done
    }

    fn move_to(&mut self, to: Point) {
        self.end_polyline();
        self.state.move_to(to);
        // The pen goes down at the new position.
        self.current.push(to);
        self.pen_down = true;
    }

    fn line_to(&mut self, to: Point) {
        self.ensure_pen_down();
        self.current.push(to);
        self.state.line_to(to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.ensure_pen_down();
        let curve = CubicBezierSegment {
            from: self.state.current_position(),
            ctrl1,
            ctrl2,
            to,
        };
        // The first sampled point is the current position, already recorded.
        self.current.extend(curve.sampled().skip(1));
        self.state.cubic_bezier_to(ctrl1, ctrl2, to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.ensure_pen_down();
        let curve = QuadraticBezierSegment {
            from: self.state.current_position(),
            ctrl,
            to,
        };
        self.current.extend(curve.to_cubic().sampled().skip(1));
        self.state.quadratic_bezier_to(ctrl, to);
    }

    fn close(&mut self) {
        if self.pen_down && self.state.current_position() != self.state.start_position() {
            self.current.push(self.state.start_position());
        }
        self.state.close();
    }

    fn ensure_pen_down(&mut self) {
        if !self.pen_down {
            self.current.push(self.state.current_position());
            self.pen_down = true;
        }
    }

    fn end_polyline(&mut self) {
        if self.pen_down {
            let points = std::mem::replace(&mut self.current, Vec::new());
            self.done.push(Polyline { points });
            self.pen_down = false;
        }
    }
}

impl Default for PolylineBuilder {
    fn default() -> Self { PolylineBuilder::new() }
}

#[test]
fn close_returns_to_subpath_start() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(0.0, 0.0)));
    builder.svg_event(SvgEvent::LineTo(point(10.0, 0.0)));
    builder.svg_event(SvgEvent::LineTo(point(10.0, 10.0)));
    builder.svg_event(SvgEvent::Close);

    let polylines = builder.build();
    assert_eq!(polylines.len(), 1);
    assert_eq!(
        polylines[0].points,
        vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 0.0),
        ]
    );
}

#[test]
fn close_at_subpath_start_adds_nothing() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(0.0, 0.0)));
    builder.svg_event(SvgEvent::LineTo(point(10.0, 0.0)));
    builder.svg_event(SvgEvent::LineTo(point(0.0, 0.0)));
    builder.svg_event(SvgEvent::Close);

    let polylines = builder.build();
    assert_eq!(polylines[0].points.len(), 3);
}

#[test]
fn pen_up_between_subpaths() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(0.0, 0.0)));
    builder.svg_event(SvgEvent::LineTo(point(1.0, 0.0)));
    builder.svg_event(SvgEvent::MoveTo(point(5.0, 5.0)));
    builder.svg_event(SvgEvent::LineTo(point(6.0, 5.0)));

    let polylines = builder.build();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].points, vec![point(0.0, 0.0), point(1.0, 0.0)]);
    assert_eq!(polylines[1].points, vec![point(5.0, 5.0), point(6.0, 5.0)]);
}

#[test]
fn move_then_move_is_a_dot() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(2.0, 3.0)));
    builder.svg_event(SvgEvent::MoveTo(point(4.0, 5.0)));

    let polylines = builder.build();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].points, vec![point(2.0, 3.0)]);
    assert_eq!(polylines[1].points, vec![point(4.0, 5.0)]);
}

#[test]
fn line_without_move_starts_at_origin() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::LineTo(point(3.0, 4.0)));

    let polylines = builder.build();
    assert_eq!(polylines[0].points, vec![point(0.0, 0.0), point(3.0, 4.0)]);
}

#[test]
fn horizontal_and_vertical_lines() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(1.0, 1.0)));
    builder.svg_event(SvgEvent::HorizontalLineTo(5.0));
    builder.svg_event(SvgEvent::RelativeVerticalLineTo(2.0));

    let polylines = builder.build();
    assert_eq!(
        polylines[0].points,
        vec![point(1.0, 1.0), point(5.0, 1.0), point(5.0, 3.0)]
    );
}

#[test]
fn cubic_samples_are_recorded() {
    let mut builder = PolylineBuilder::new();
    builder.svg_event(SvgEvent::MoveTo(point(0.0, 0.0)));
    builder.svg_event(SvgEvent::CubicTo(
        point(0.0, 10.0),
        point(10.0, 10.0),
        point(10.0, 0.0),
    ));

    let polylines = builder.build();
    let points = &polylines[0].points;
    assert!(points.len() > 3);
    assert_eq!(points[0], point(0.0, 0.0));
    assert_eq!(*points.last().unwrap(), point(10.0, 0.0));
}
