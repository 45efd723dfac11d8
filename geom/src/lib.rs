//! Simple 2D segment math for the plume plotter compiler.
//!
//! This crate provides the small geometric vocabulary the rest of the
//! workspace is built on: `f32` points and vectors in document space
//! (aliased from [euclid](https://docs.rs/euclid)), `i32` points in
//! destination pixel space, and line/bézier segment types with the
//! sampling routines used to turn curves into polylines.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate euclid;

pub mod math;
mod line;
mod cubic_bezier;
mod quadratic_bezier;

pub use crate::cubic_bezier::{CubicBezierSegment, Sampled};
pub use crate::line::LineSegment;
pub use crate::quadratic_bezier::QuadraticBezierSegment;
