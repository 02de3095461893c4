use ahash::AHashMap;
use serde::Deserialize;

use crate::{
    error::{Document, Error, Result},
    region::RegionId,
};

/// One row of the statistics document.
///
/// Field names follow the generic schema (`regionId`, `statisticValue`, `primaryLabel`,
/// `secondaryLabel`); the education dataset's names (`fips`, `bachelorsOrHigher`,
/// `area_name`, `state`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticRecord {
    #[serde(rename = "regionId", alias = "fips")]
    pub region_id: RegionId,
    #[serde(rename = "statisticValue", alias = "bachelorsOrHigher")]
    pub value: f64,
    #[serde(rename = "primaryLabel", alias = "area_name", default)]
    pub primary_label: String,
    #[serde(rename = "secondaryLabel", alias = "state", default)]
    pub secondary_label: String,
}

impl StatisticRecord {
    /// "<primary>, <secondary>", or just the primary label when there is no parent region.
    pub fn label(&self) -> String {
        if self.secondary_label.is_empty() {
            self.primary_label.clone()
        } else {
            format!("{}, {}", self.primary_label, self.secondary_label)
        }
    }
}

/// Ordered statistics records with an id index.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    records: Vec<StatisticRecord>,
    index: AHashMap<RegionId, usize>,
}

impl Statistics {
    /// Build from records; a repeated id resolves to its last occurrence.
    pub fn new(records: Vec<StatisticRecord>) -> Self {
        let index = records.iter().enumerate()
            .map(|(i, record)| (record.region_id.clone(), i))
            .collect();
        Self { records, index }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<StatisticRecord> = serde_json::from_slice(bytes)
            .map_err(|source| Error::Parse { document: Document::Statistics, source })?;
        Ok(Self::new(records))
    }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    #[inline] pub fn records(&self) -> &[StatisticRecord] { &self.records }

    #[inline]
    pub fn get(&self, id: &RegionId) -> Option<&StatisticRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Every observed statistic value, in document order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.value)
    }
}
