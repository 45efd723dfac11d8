use crate::line::LineSegment;
use crate::math::Point;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;
        self.from * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3
    }

    /// The line segment between this curve's endpoints.
    #[inline]
    pub fn baseline(&self) -> LineSegment {
        LineSegment { from: self.from, to: self.to }
    }

    /// Approximates the curve's length as the average of the chord and the
    /// control polygon lengths.
    ///
    /// The true arc length is bracketed by the two, which is plenty accurate
    /// for choosing a sampling density.
    pub fn approximate_length(&self) -> f32 {
        let chord = self.baseline().length();
        let polygon = (self.ctrl1 - self.from).length()
            + (self.ctrl2 - self.ctrl1).length()
            + (self.to - self.ctrl2).length();

        (chord + polygon) * 0.5
    }

    /// The number of segments to subdivide this curve into when approximating
    /// it with a polyline.
    ///
    /// Short curves only need a few samples while long ones scale with their
    /// length, capped so that a single curve never floods the point buffer.
    pub fn sample_count(&self) -> u32 {
        let length = self.approximate_length();
        if length < 5.0 {
            3
        } else if length < 20.0 {
            5
        } else if length < 50.0 {
            8
        } else {
            ((length * 0.15).round() as u32).max(8).min(15)
        }
    }

    /// Returns an iterator over `sample_count() + 1` uniformly spaced points
    /// along the curve, including both endpoints.
    pub fn sampled(&self) -> Sampled {
        Sampled {
            curve: *self,
            count: self.sample_count(),
            index: 0,
        }
    }
}

/// An iterator over uniformly spaced points along a cubic bézier segment.
///
/// The iterator starts at the origin of the curve and ends at its
/// destination, yielding the same points for the same curve every time.
pub struct Sampled {
    curve: CubicBezierSegment,
    count: u32,
    index: u32,
}

impl Iterator for Sampled {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index > self.count {
            return None;
        }

        let t = self.index as f32 / self.count as f32;
        self.index += 1;

        Some(self.curve.sample(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1 - self.index) as usize;
        (remaining, Some(remaining))
    }
}

// A curve with collinear control points, so approximate_length() is exactly
// its chord length.
#[cfg(test)]
fn flat_curve(length: f32) -> CubicBezierSegment {
    use crate::math::point;
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(length / 3.0, 0.0),
        ctrl2: point(length * 2.0 / 3.0, 0.0),
        to: point(length, 0.0),
    }
}

#[test]
fn sample_endpoints() {
    use crate::math::point;
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 3.0),
        ctrl2: point(4.0, 3.0),
        to: point(5.0, 0.0),
    };
    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
}

#[test]
fn sample_count_buckets() {
    assert_eq!(flat_curve(2.0).sample_count(), 3);
    assert_eq!(flat_curve(10.0).sample_count(), 5);
    assert_eq!(flat_curve(30.0).sample_count(), 8);
    assert_eq!(flat_curve(60.0).sample_count(), 9);
    assert_eq!(flat_curve(500.0).sample_count(), 15);
}

#[test]
fn sampled_points() {
    let curve = flat_curve(30.0);
    let points: Vec<_> = curve.sampled().collect();

    assert_eq!(points.len() as u32, curve.sample_count() + 1);
    assert_eq!(points[0], curve.from);
    assert_eq!(*points.last().unwrap(), curve.to);

    // Sampling is deterministic.
    let again: Vec<_> = curve.sampled().collect();
    assert_eq!(points, again);
}
