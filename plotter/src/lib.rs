//! # Plume plotter
//!
//! Compiles a tree of vector elements into a linear stream of pen plotter
//! instructions.
//!
//! The compiler walks a tree of [Element](struct.Element.html)s, interprets
//! path data into polylines, applies the element and viewport transforms,
//! simplifies the result and emits [PlotterCommand](enum.PlotterCommand.html)s
//! ready to be written to the device as text, one instruction per line.
//!
//! # Examples
//!
//! ```
//! use plume_plotter::{compile_document, Element, PlotOptions};
//!
//! let elements = vec![Element::path("M 0 0 L 10 0 L 10 10 z")];
//! let options = PlotOptions::default().with_scale(1.0).with_offset(0.0, 0.0);
//!
//! let commands = compile_document(&elements, &options);
//! for command in &commands {
//!     println!("{}", command);
//! }
//! ```
//!
//! There are no fatal conditions in the compiler: malformed path data is
//! truncated, unsupported commands degrade to straight segments and empty
//! documents fall back to a default scale and offset. Callers that care can
//! treat "zero commands out of a non-empty element" as an error on their
//! side.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate plume_geom as geom;
pub extern crate plume_path as path;
pub extern crate plume_svg as svg;

mod bounds;
mod command;
mod convert;
mod element;
mod fit;
pub mod simplify;
mod transform;

#[cfg(test)]
mod convert_tests;

pub use crate::bounds::{document_bounds, element_bounds, path_bounds};
pub use crate::command::{write_commands, CommandWriter, PlotterCommand};
pub use crate::convert::{compile_document, compile_element, PlotOptions};
pub use crate::element::{Element, ElementKind};
pub use crate::fit::fit_viewport;
pub use crate::transform::{Transform, Viewport};

pub use crate::geom::math;
