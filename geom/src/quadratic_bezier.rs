use crate::cubic_bezier::CubicBezierSegment;
use crate::math::Point;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        self.from * one_t2
            + self.ctrl.to_vector() * 2.0 * one_t * t
            + self.to.to_vector() * t2
    }

    /// Elevate this curve to a cubic bézier describing the same shape.
    pub fn to_cubic(&self) -> CubicBezierSegment {
        CubicBezierSegment {
            from: self.from,
            ctrl1: (self.from + self.ctrl.to_vector() * 2.0) / 3.0,
            ctrl2: (self.to + self.ctrl.to_vector() * 2.0) / 3.0,
            to: self.to,
        }
    }
}

#[test]
fn to_cubic_preserves_shape() {
    use crate::math::point;

    let quad = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    };
    let cubic = quad.to_cubic();

    assert_eq!(cubic.from, quad.from);
    assert_eq!(cubic.to, quad.to);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let a = quad.sample(t);
        let b = cubic.sample(t);
        assert!((a - b).length() < 0.001, "{:?} != {:?} at t = {}", a, b, t);
    }
}
