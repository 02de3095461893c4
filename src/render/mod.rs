//! The render pipeline: projection, map shapes and meshes, legend, and the per-pass frame.

mod legend;
mod map;
mod pipeline;
mod projection;
mod shapes;

pub use legend::{Legend, LegendEntry, LegendRenderer, LegendTick};
pub use map::MapRenderer;
pub use pipeline::{draw_failure, render, Frame};
pub use projection::{Projection, ProjectionKind};
pub use shapes::{ShapeIndex, ShapeMeta};
