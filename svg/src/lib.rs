//! # Plume svg
//!
//! Turns SVG path-data strings into the event stream consumed by the
//! plotter compiler.
//!
//! Tokenization and parsing never fail: malformed input degrades by
//! skipping unrecognized bytes and silently discarding truncated trailing
//! operand groups, so that a damaged path still yields every command that
//! could be read before the damage.

pub extern crate plume_geom as geom;
pub extern crate plume_path as path;

pub mod parser;
pub mod path_utils;
pub mod tokenizer;

pub use crate::parser::PathParser;
pub use crate::path_utils::build_polylines;
pub use crate::tokenizer::{parse_point_list, Token, Tokenizer};

pub use crate::geom::math;
