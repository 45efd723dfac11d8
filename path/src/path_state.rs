use crate::math::{point, Point, Vector};

#[derive(Copy, Clone, Debug, PartialEq)]
enum LastCtrl {
    Cubic(Point),
    Quad(Point),
    None,
}

/// Represents the current state of the cursor while a path is being
/// interpreted.
///
/// Tracks the current position, the first point of the current sub-path and
/// the last control point, which the smooth curve commands reflect through
/// the current position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathState {
    current: Point,
    first: Point,
    last_ctrl: LastCtrl,
}

impl PathState {
    pub fn new() -> Self {
        PathState {
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
            last_ctrl: LastCtrl::None,
        }
    }

    /// The current position.
    pub fn current_position(&self) -> Point { self.current }

    /// The position at the start of the current sub-path.
    pub fn start_position(&self) -> Point { self.first }

    pub fn move_to(&mut self, to: Point) {
        self.last_ctrl = LastCtrl::None;
        self.current = to;
        self.first = to;
    }

    pub fn line_to(&mut self, to: Point) {
        self.last_ctrl = LastCtrl::None;
        self.current = to;
    }

    pub fn close(&mut self) {
        self.last_ctrl = LastCtrl::None;
        self.current = self.first;
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.last_ctrl = LastCtrl::Quad(ctrl);
        self.current = to;
    }

    pub fn cubic_bezier_to(&mut self, _ctrl1: Point, ctrl2: Point, to: Point) {
        self.last_ctrl = LastCtrl::Cubic(ctrl2);
        self.current = to;
    }

    /// The first control point of a smooth cubic command: the previous
    /// command's second control point reflected through the current
    /// position, or the current position if the previous command was not a
    /// cubic.
    pub fn get_smooth_cubic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Cubic(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    /// The control point of a smooth quadratic command, following the same
    /// reflection rule.
    pub fn get_smooth_quadratic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Quad(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    pub fn relative_to_absolute(&self, v: Vector) -> Point { self.current + v }
}

impl Default for PathState {
    fn default() -> Self { PathState::new() }
}

#[test]
fn smooth_ctrl_reflection() {
    use crate::math::point;

    let mut state = PathState::new();
    state.move_to(point(0.0, 0.0));
    state.cubic_bezier_to(point(1.0, 2.0), point(4.0, 6.0), point(10.0, 0.0));

    assert_eq!(state.get_smooth_cubic_ctrl(), point(16.0, -6.0));
    // A smooth quadratic after a cubic falls back to the current position.
    assert_eq!(state.get_smooth_quadratic_ctrl(), point(10.0, 0.0));

    state.line_to(point(20.0, 0.0));
    // Lines reset the reflection rule.
    assert_eq!(state.get_smooth_cubic_ctrl(), point(20.0, 0.0));
}
