use geo::MultiPolygon;

use crate::{
    data::{RegionShape, StatisticRecord, Statistics},
    error::{Error, Result},
};

use super::RegionId;

/// A geometry region paired with its statistics record.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub shape: &'a RegionShape,
    pub record: &'a StatisticRecord,
}

impl<'a> Region<'a> {
    #[inline] pub fn id(&self) -> &'a RegionId { &self.shape.id }

    #[inline] pub fn geometry(&self) -> &'a MultiPolygon<f64> { &self.shape.geometry }

    #[inline] pub fn value(&self) -> f64 { self.record.value }

    /// Display label, e.g. "Autauga County, AL".
    pub fn label(&self) -> String { self.record.label() }
}

/// Join every geometry region to its statistics record.
/// The first region without a record aborts the join; no partial result is returned.
pub fn join<'a>(shapes: &'a [RegionShape], statistics: &'a Statistics) -> Result<Vec<Region<'a>>> {
    shapes.iter()
        .map(|shape| {
            let record = statistics.get(&shape.id)
                .ok_or_else(|| Error::Join { region: shape.id.clone() })?;
            Ok(Region { shape, record })
        })
        .collect()
}
