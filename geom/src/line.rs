use crate::math::{Point, Vector};

/// A 2d line segment defined by its two endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    /// The vector between this segment's endpoints.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.to_vector().length()
    }

    /// Perpendicular distance from a point to the line this segment lies on.
    ///
    /// When the segment has zero length the distance degrades to the plain
    /// euclidean distance between `p` and the segment's position.
    pub fn distance_to_point(&self, p: Point) -> f32 {
        let d = self.to_vector();
        let l2 = d.square_length();
        if l2 == 0.0 {
            return (p - self.from).length();
        }

        ((p - self.from).cross(d)).abs() / l2.sqrt()
    }
}

#[test]
fn distance_to_point() {
    use crate::math::point;

    let seg = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };

    assert_eq!(seg.distance_to_point(point(5.0, 3.0)), 3.0);
    assert_eq!(seg.distance_to_point(point(5.0, -3.0)), 3.0);
    assert_eq!(seg.distance_to_point(point(5.0, 0.0)), 0.0);
}

#[test]
fn distance_to_point_degenerate() {
    use crate::math::point;

    let seg = LineSegment {
        from: point(1.0, 1.0),
        to: point(1.0, 1.0),
    };

    assert_eq!(seg.distance_to_point(point(4.0, 5.0)), 5.0);
}
