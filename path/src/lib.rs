//! # Plume path
//!
//! Path command events and the interpreter that folds them into polylines.
//!
//! The [PolylineBuilder](polyline/struct.PolylineBuilder.html) is the heart
//! of the plotter compiler: it consumes a sequence of [SvgEvent](enum.SvgEvent.html)s,
//! tracks the cursor and pen state across commands, samples curved segments
//! into points and produces one [Polyline](polyline/struct.Polyline.html)
//! per pen-down run.
//!
//! # Examples
//!
//! ```
//! use plume_path::PolylineBuilder;
//! use plume_path::SvgEvent;
//! use plume_path::math::point;
//!
//! let mut builder = PolylineBuilder::new();
//! builder.svg_event(SvgEvent::MoveTo(point(0.0, 0.0)));
//! builder.svg_event(SvgEvent::LineTo(point(10.0, 0.0)));
//! builder.svg_event(SvgEvent::LineTo(point(10.0, 10.0)));
//! builder.svg_event(SvgEvent::Close);
//!
//! let polylines = builder.build();
//! assert_eq!(polylines.len(), 1);
//! assert_eq!(polylines[0].points.len(), 4);
//! ```

pub extern crate plume_geom as geom;

mod events;
mod path_state;
pub mod polyline;

pub use crate::events::SvgEvent;
pub use crate::path_state::PathState;
pub use crate::polyline::{Polyline, PolylineBuilder};

pub use crate::geom::math;
