//! Log markup generation
//!
//! Converts completed terminal lines into the tag syntax understood by the
//! rich-text log view: escaping of literal text, SGR-to-tag translation,
//! and the per-line converter that ties them to the scanner.

pub mod convert;
pub mod escape;
pub mod sgr;
pub mod tag;

pub use convert::line_to_markup;
pub use escape::escape;
pub use tag::{Plane, StyleTag};
