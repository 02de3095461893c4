use geo::{Coord, CoordsIter, LineString, MapCoords, MultiLineString, MultiPolygon};

use crate::{
    data::Dataset,
    error::Result,
    layout::Layout,
    region::{join, Region},
    scale::ColorScale,
    settings::Settings,
    surface::{DrawingSurface, ElementId, PathData, Style},
};

use super::{Projection, ShapeIndex, ShapeMeta};

/// Draws one filled shape per region plus the fine and coarse border meshes.
#[derive(Debug, Clone, Copy)]
pub struct MapRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self { Self { settings } }

    /// Join, then draw into group `#map`. The join completes before the first draw
    /// command, so a missing statistics record leaves the surface untouched.
    pub fn draw<S: DrawingSurface>(
        &self,
        dataset: &Dataset,
        scale: &ColorScale,
        layout: &Layout,
        surface: &mut S,
    ) -> Result<ShapeIndex> {
        let regions = join(dataset.regions(), dataset.statistics())?;

        let Some(bounds) = dataset.bounds() else {
            tracing::warn!("topology has no region geometry; nothing to draw");
            return Ok(ShapeIndex::default());
        };
        let projection = Projection::fit(self.settings.projection, bounds, layout.inner());

        surface.begin_group("map", (0.0, 0.0));

        let shapes = regions.iter()
            .map(|region| self.draw_region(region, scale, &projection, surface))
            .collect();

        // coarse borders go last so they sit on top of the fine ones
        surface.draw_path(&mesh_to_path(dataset.fine_mesh(), &projection), &Style::class("mesh-fine"));
        surface.draw_path(&mesh_to_path(dataset.coarse_mesh(), &projection), &Style::class("mesh-coarse"));

        surface.end_group();

        Ok(ShapeIndex::new(shapes))
    }

    fn draw_region<S: DrawingSurface>(
        &self,
        region: &Region<'_>,
        scale: &ColorScale,
        projection: &Projection,
        surface: &mut S,
    ) -> (ElementId, ShapeMeta, MultiPolygon<f64>) {
        let projected = region.geometry().map_coords(|coord| projection.project(coord));
        let style = Style::class("region").with_fill(scale.color_of(region.value()));
        let element = surface.draw_path(&multipolygon_to_path(&projected), &style);

        let meta = ShapeMeta {
            region_id: region.id().clone(),
            label: region.label(),
            primary: region.record.primary_label.clone(),
            secondary: region.record.secondary_label.clone(),
            value: region.value(),
        };
        (element, meta, projected)
    }
}

/// Build a compact SVG path for a MultiPolygon (exteriors + holes), already in canvas space.
fn multipolygon_to_path(shape: &MultiPolygon<f64>) -> PathData {
    let mut path = PathData::new();
    for polygon in &shape.0 {
        push_ring(&mut path, polygon.exterior());
        for interior in polygon.interiors() {
            push_ring(&mut path, interior);
        }
    }
    path
}

/// Rings are stored closed; drop the repeated last point and let `Z` close the subpath.
fn push_ring(path: &mut PathData, ring: &LineString<f64>) {
    let count = if ring.is_closed() { ring.0.len().saturating_sub(1) } else { ring.0.len() };
    path.push_ring(ring.0.iter().take(count).copied());
}

fn mesh_to_path(mesh: &MultiLineString<f64>, projection: &Projection) -> PathData {
    let mut path = PathData::new();
    for line in mesh {
        path.push_line(line.coords_iter().map(|coord: Coord<f64>| projection.project(coord)));
    }
    path
}
