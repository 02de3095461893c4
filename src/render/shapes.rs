use ahash::AHashMap;
use geo::{BoundingRect, Coord, Intersects, MultiPolygon, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::{region::RegionId, surface::ElementId};

/// Per-shape record read back when the pointer lands on a drawn region.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMeta {
    pub region_id: RegionId,
    /// Display label, e.g. "Autauga County, AL".
    pub label: String,
    pub primary: String,
    pub secondary: String,
    pub value: f64,
}

/// A bounding box in an R-tree, associated with a drawn shape by index.
#[derive(Debug, Clone)]
struct ShapeBox {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for ShapeBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    element: ElementId,
    meta: ShapeMeta,
    /// Geometry in canvas coordinates.
    shape: MultiPolygon<f64>,
}

/// Side mapping from drawn elements to their region metadata, plus a spatial index of the
/// projected shapes for point hit-testing. Built once per render pass.
#[derive(Debug, Clone, Default)]
pub struct ShapeIndex {
    entries: Vec<Entry>,
    by_element: AHashMap<ElementId, usize>,
    rtree: RTree<ShapeBox>,
}

impl ShapeIndex {
    pub(crate) fn new(shapes: Vec<(ElementId, ShapeMeta, MultiPolygon<f64>)>) -> Self {
        let entries = shapes.into_iter()
            .map(|(element, meta, shape)| Entry { element, meta, shape })
            .collect::<Vec<_>>();

        let by_element = entries.iter().enumerate()
            .map(|(i, entry)| (entry.element, i))
            .collect();

        let rtree = RTree::bulk_load(
            entries.iter().enumerate()
                .filter_map(|(idx, entry)| entry.shape.bounding_rect().map(|bbox| ShapeBox { idx, bbox }))
                .collect()
        );

        Self { entries, by_element, rtree }
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Metadata of the shape drawn as `element`.
    pub fn get(&self, element: ElementId) -> Option<&ShapeMeta> {
        self.by_element.get(&element).map(|&i| &self.entries[i].meta)
    }

    /// Drawn elements and their metadata, in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &ShapeMeta)> {
        self.entries.iter().map(|entry| (entry.element, &entry.meta))
    }

    /// Topmost shape containing `point` (canvas coordinates); boundary points count as inside.
    pub fn hit_test(&self, point: Coord<f64>) -> Option<ElementId> {
        let target = Point::from(point);
        self.rtree.locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .filter(|candidate| self.entries[candidate.idx].shape.intersects(&target))
            .map(|candidate| candidate.idx)
            .max()
            .map(|idx| self.entries[idx].element)
    }
}
