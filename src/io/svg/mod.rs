//! SVG output: a retained drawing surface and the writers that serialize it.

mod surface;
mod writer;

pub use surface::SvgSurface;
pub(crate) use writer::*;
