mod join;
mod region_id;

pub use join::{join, Region};
pub use region_id::RegionId;
