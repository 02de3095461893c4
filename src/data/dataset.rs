use geo::{BoundingRect, Coord, MultiLineString, Rect};

use crate::{
    error::{Document, Error, Result},
    settings::Settings,
};

use super::{MeshFilter, RegionShape, Source, Statistics, Topology};

/// Immutable snapshot of both input documents, decoded once and read by every render pass.
#[derive(Debug, Clone)]
pub struct Dataset {
    regions: Vec<RegionShape>,
    fine_mesh: MultiLineString<f64>,
    coarse_mesh: MultiLineString<f64>,
    statistics: Statistics,
}

impl Dataset {
    /// Fetch both documents concurrently, bounded by `settings.fetch_timeout`.
    /// Nothing is decoded until both have arrived.
    pub async fn load(topology: &Source, statistics: &Source, settings: &Settings) -> Result<Self> {
        let fetch_both = futures::future::try_join(
            topology.fetch(Document::Topology),
            statistics.fetch(Document::Statistics),
        );

        let (topology, statistics) = tokio::time::timeout(settings.fetch_timeout, fetch_both).await
            .map_err(|_| Error::FetchTimeout { after: settings.fetch_timeout })??;

        let dataset = Self::from_slices(&topology, &statistics, settings)?;
        tracing::info!(
            regions = dataset.regions.len(),
            records = dataset.statistics.len(),
            "dataset loaded",
        );
        Ok(dataset)
    }

    pub fn from_slices(topology: &[u8], statistics: &[u8], settings: &Settings) -> Result<Self> {
        Self::from_documents(&Topology::from_slice(topology)?, Statistics::from_slice(statistics)?, settings)
    }

    pub fn from_documents(topology: &Topology, statistics: Statistics, settings: &Settings) -> Result<Self> {
        if statistics.is_empty() { return Err(Error::EmptyStatistics) }

        Ok(Self {
            regions: topology.features(&settings.fine_object)?,
            fine_mesh: topology.mesh(&settings.fine_object, MeshFilter::Interior)?,
            coarse_mesh: topology.mesh(&settings.coarse_object, MeshFilter::Interior)?,
            statistics,
        })
    }

    #[inline] pub fn regions(&self) -> &[RegionShape] { &self.regions }

    #[inline] pub fn fine_mesh(&self) -> &MultiLineString<f64> { &self.fine_mesh }

    #[inline] pub fn coarse_mesh(&self) -> &MultiLineString<f64> { &self.coarse_mesh }

    #[inline] pub fn statistics(&self) -> &Statistics { &self.statistics }

    /// Bounding rectangle of all region geometry.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.regions.iter()
            .filter_map(|region| region.geometry.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord {
                    x: a.min().x.min(b.min().x),
                    y: a.min().y.min(b.min().y),
                },
                Coord {
                    x: a.max().x.max(b.max().x),
                    y: a.max().y.max(b.max().y),
                }
            ))
    }
}
