//! IO module for format-specific output.
//!
//! - `svg` - SVG documents: the bundled drawing surface and its writers
pub(crate) mod svg;
