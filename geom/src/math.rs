//! `f32` geometric types in document space, `i32` in pixel space,
//! aliased from euclid.

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Point2D<i32>`.
pub type IntPoint = euclid::default::Point2D<i32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Alias for `euclid::default::Size2D<f32>`.
pub type Size = euclid::default::Size2D<f32>;

/// Alias for `euclid::default::Size2D<i32>`.
pub type IntSize = euclid::default::Size2D<i32>;

/// Alias for `euclid::default::Rect<f32>`.
pub type Rect = euclid::default::Rect<f32>;

/// Shorthand for `Point::new`.
#[inline]
pub fn point(x: f32, y: f32) -> Point { Point::new(x, y) }

/// Shorthand for `IntPoint::new`.
#[inline]
pub fn int_point(x: i32, y: i32) -> IntPoint { IntPoint::new(x, y) }

/// Shorthand for `Vector::new`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector { Vector::new(x, y) }

/// Shorthand for `Size::new`.
#[inline]
pub fn size(w: f32, h: f32) -> Size { Size::new(w, h) }

/// Shorthand for `IntSize::new`.
#[inline]
pub fn int_size(w: i32, h: i32) -> IntSize { IntSize::new(w, h) }

/// Shorthand for `Rect::new`.
#[inline]
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(point(x, y), size(w, h)) }
