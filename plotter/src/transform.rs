use regex::Regex;

use crate::math::{int_point, point, vector, IntPoint, IntSize, Point, Vector};

/// The affine transform attached to an element: a translation and a
/// component-wise scale.
///
/// Rotation is recognized in the transform attribute syntax and composes,
/// but it is intentionally never applied to point coordinates: the target
/// domain is axis-aligned schematic output.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Transform {
    pub translate: Vector,
    pub scale: Vector,
    pub rotate: f32,
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            translate: vector(0.0, 0.0),
            scale: vector(1.0, 1.0),
            rotate: 0.0,
        }
    }

    pub fn translation(x: f32, y: f32) -> Self {
        Transform {
            translate: vector(x, y),
            ..Transform::identity()
        }
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Transform {
            scale: vector(sx, sy),
            ..Transform::identity()
        }
    }

    /// Parses a transform attribute string.
    ///
    /// Recognizes `translate(tx[,ty])`, `scale(sx[,sy])` and `rotate(a)`;
    /// a missing `ty` defaults to 0 and a missing `sy` to `sx`. Anything
    /// else in the string is ignored.
    pub fn parse(src: &str) -> Transform {
        let mut result = Transform::identity();
        if src.is_empty() {
            return result;
        }

        let translate = Regex::new(r"translate\s*\(\s*([^,\)]+)\s*(?:,\s*([^)]+))?\s*\)").unwrap();
        if let Some(caps) = translate.captures(src) {
            let tx = number(caps.get(1).map(|m| m.as_str())).unwrap_or(0.0);
            let ty = number(caps.get(2).map(|m| m.as_str())).unwrap_or(0.0);
            result.translate = vector(tx, ty);
        }

        let scale = Regex::new(r"scale\s*\(\s*([^,\)]+)\s*(?:,\s*([^)]+))?\s*\)").unwrap();
        if let Some(caps) = scale.captures(src) {
            let sx = number(caps.get(1).map(|m| m.as_str())).unwrap_or(1.0);
            let sy = number(caps.get(2).map(|m| m.as_str())).unwrap_or(sx);
            result.scale = vector(sx, sy);
        }

        let rotate = Regex::new(r"rotate\s*\(\s*([^)]+)\s*\)").unwrap();
        if let Some(caps) = rotate.captures(src) {
            result.rotate = number(caps.get(1).map(|m| m.as_str())).unwrap_or(0.0);
        }

        result
    }

    /// Combines this transform with a child's: translations add, scales
    /// multiply component-wise, rotations add.
    pub fn then(&self, child: &Transform) -> Transform {
        Transform {
            translate: self.translate + child.translate,
            scale: vector(self.scale.x * child.scale.x, self.scale.y * child.scale.y),
            rotate: self.rotate + child.rotate,
        }
    }

    /// Applies the transform to a point: translate, then scale.
    pub fn apply(&self, p: Point) -> Point {
        point(
            (p.x + self.translate.x) * self.scale.x,
            (p.y + self.translate.y) * self.scale.y,
        )
    }
}

impl Default for Transform {
    fn default() -> Self { Transform::identity() }
}

fn number(m: Option<&str>) -> Option<f32> {
    m.and_then(|s| s.trim().parse().ok())
}

/// The document-to-pixel mapping: `pixel = round(doc * scale + offset)`,
/// clamped to the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub scale: f32,
    pub offset: Vector,
    pub canvas: IntSize,
}

impl Viewport {
    pub fn new(scale: f32, offset: Vector, canvas: IntSize) -> Self {
        Viewport { scale, offset, canvas }
    }

    /// Maps a document point into (unrounded) pixel space.
    #[inline]
    pub fn map(&self, p: Point) -> Point {
        point(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }

    /// Rounds an already-mapped pixel point and clamps both axes
    /// independently to the canvas.
    #[inline]
    pub fn snap(&self, p: Point) -> IntPoint {
        int_point(
            (p.x.round() as i32).max(0).min(self.canvas.width - 1),
            (p.y.round() as i32).max(0).min(self.canvas.height - 1),
        )
    }

    /// Maps a document point all the way to a destination pixel.
    #[inline]
    pub fn to_pixel(&self, p: Point) -> IntPoint {
        self.snap(self.map(p))
    }
}

#[test]
fn parse_transform_attribute() {
    let t = Transform::parse("translate(10, -4.5) scale(2)");
    assert_eq!(t.translate, vector(10.0, -4.5));
    assert_eq!(t.scale, vector(2.0, 2.0));
    assert_eq!(t.rotate, 0.0);

    let t = Transform::parse("scale(2,3)");
    assert_eq!(t.translate, vector(0.0, 0.0));
    assert_eq!(t.scale, vector(2.0, 3.0));

    let t = Transform::parse("rotate(90)");
    assert_eq!(t.rotate, 90.0);

    let t = Transform::parse("translate(5)");
    assert_eq!(t.translate, vector(5.0, 0.0));

    let t = Transform::parse("matrix(1 0 0 1 10 10)");
    assert_eq!(t, Transform::identity());
}

#[test]
fn combine_transforms() {
    let parent = Transform::parse("translate(10, 20) scale(2)");
    let child = Transform::parse("translate(1, 2) scale(3) rotate(45)");
    let combined = parent.then(&child);

    assert_eq!(combined.translate, vector(11.0, 22.0));
    assert_eq!(combined.scale, vector(6.0, 6.0));
    assert_eq!(combined.rotate, 45.0);
}

#[test]
fn apply_translates_then_scales() {
    let t = Transform {
        translate: vector(1.0, 2.0),
        scale: vector(10.0, 100.0),
        rotate: 0.0,
    };
    assert_eq!(t.apply(point(1.0, 1.0)), point(20.0, 300.0));
}

#[test]
fn rotation_is_not_applied() {
    let t = Transform::parse("rotate(90)");
    assert_eq!(t.apply(point(3.0, 4.0)), point(3.0, 4.0));
}

#[test]
fn viewport_rounds_and_clamps() {
    use crate::math::int_size;

    let viewport = Viewport::new(10.0, vector(5.0, 5.0), int_size(100, 50));

    assert_eq!(viewport.to_pixel(point(1.04, 1.06)), int_point(15, 16));
    // Out of canvas on both sides.
    assert_eq!(viewport.to_pixel(point(-10.0, 100.0)), int_point(0, 49));
}
