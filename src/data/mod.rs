//! Input documents: where they come from and how they decode into geometry and statistics.

mod dataset;
mod source;
mod statistics;
mod topology;

pub use dataset::Dataset;
pub use source::Source;
pub use statistics::{StatisticRecord, Statistics};
pub use topology::{MeshFilter, RegionShape, Topology};
