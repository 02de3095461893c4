use std::collections::HashMap;

use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use serde::{Deserialize, Deserializer};

use crate::{
    error::{Document, Error, Result},
    region::RegionId,
};

/// A TopoJSON topology: shared arcs plus named geometry objects that reference them.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub objects: HashMap<String, TopoGeometry>,
    pub arcs: Vec<Vec<Vec<f64>>>,
}

/// Quantization transform; arc positions are delta-encoded integers when present.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// A geometry object. A `null` type, or one not listed here, decodes as
/// [`TopoGeometry::Unsupported`] and is skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<RegionId>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<RegionId>,
    },
    LineString {
        arcs: Vec<i64>,
    },
    MultiLineString {
        arcs: Vec<Vec<i64>>,
    },
    #[serde(other)]
    Unsupported,
}

impl<'de> Deserialize<'de> for TopoGeometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.get("type").is_some_and(serde_json::Value::is_null) {
            return Ok(TopoGeometry::Unsupported);
        }
        TopoGeometry::deserialize(value).map_err(serde::de::Error::custom)
    }
}

/// Which arcs of an object a mesh keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFilter {
    /// Every arc referenced by the object.
    All,
    /// Arcs shared by two different geometries (borders between neighbours).
    Interior,
    /// Arcs used by a single geometry (the outline of the object).
    Exterior,
}

/// Boundary geometry of a single region, keyed by its id.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub id: RegionId,
    pub geometry: MultiPolygon<f64>,
}

impl Topology {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|source| Error::Parse { document: Document::Topology, source })
    }

    fn object(&self, name: &str) -> Result<&TopoGeometry> {
        self.objects.get(name)
            .ok_or_else(|| Error::Topology(format!("missing object {name:?}")))
    }

    /// Decode every arc to absolute coordinates.
    fn decode_arcs(&self) -> Result<Vec<Vec<Coord<f64>>>> {
        self.arcs.iter().enumerate()
            .map(|(i, arc)| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .map(|position| {
                        let (&px, &py) = match position.as_slice() {
                            [px, py, ..] => (px, py),
                            _ => return Err(Error::Topology(format!("arc {i} has a position with fewer than two values"))),
                        };
                        Ok(match self.transform {
                            Some(Transform { scale, translate }) => {
                                x += px;
                                y += py;
                                Coord { x: x * scale[0] + translate[0], y: y * scale[1] + translate[1] }
                            }
                            None => Coord { x: px, y: py },
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    /// Convert every polygonal geometry in `object` into a region shape.
    pub fn features(&self, object: &str) -> Result<Vec<RegionShape>> {
        let arcs = self.decode_arcs()?;
        let mut shapes = Vec::new();
        collect_features(self.object(object)?, &arcs, &mut shapes)?;
        Ok(shapes)
    }

    /// Build the mesh of `object`: one line per arc kept by `filter`.
    pub fn mesh(&self, object: &str, filter: MeshFilter) -> Result<MultiLineString<f64>> {
        let arcs = self.decode_arcs()?;

        // arc index -> geometries referencing it, in visiting order
        let mut users: Vec<Vec<usize>> = vec![Vec::new(); arcs.len()];
        let mut geometry = 0;
        collect_arc_users(self.object(object)?, &mut geometry, &mut users, arcs.len())?;

        let lines = users.iter().enumerate()
            .filter(|(_, geoms)| match (filter, geoms.first(), geoms.last()) {
                (_, None, _) | (_, _, None) => false,
                (MeshFilter::All, _, _) => true,
                (MeshFilter::Interior, Some(a), Some(b)) => a != b,
                (MeshFilter::Exterior, Some(a), Some(b)) => a == b,
            })
            .map(|(i, _)| LineString(arcs[i].clone()))
            .collect();

        Ok(MultiLineString(lines))
    }
}

/// Resolve an arc reference; `!i` (i.e. `-i - 1`) denotes arc `i` reversed.
#[inline]
fn arc_index(reference: i64) -> (usize, bool) {
    if reference < 0 { ((!reference) as usize, true) } else { (reference as usize, false) }
}

/// Stitch a sequence of arc references into one ring; consecutive arcs share their joint point.
fn stitch(references: &[i64], arcs: &[Vec<Coord<f64>>]) -> Result<LineString<f64>> {
    let mut points: Vec<Coord<f64>> = Vec::new();
    for &reference in references {
        let (i, reversed) = arc_index(reference);
        let arc = arcs.get(i)
            .ok_or_else(|| Error::Topology(format!("arc reference {reference} out of range ({} arcs)", arcs.len())))?;
        points.pop();
        if reversed {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }
    Ok(LineString(points))
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Coord<f64>>]) -> Result<Option<Polygon<f64>>> {
    let mut rings = rings.iter().map(|ring| stitch(ring, arcs));
    let Some(exterior) = rings.next().transpose()? else { return Ok(None) };
    Ok(Some(Polygon::new(exterior, rings.collect::<Result<Vec<_>>>()?)))
}

fn collect_features(geometry: &TopoGeometry, arcs: &[Vec<Coord<f64>>], out: &mut Vec<RegionShape>) -> Result<()> {
    let (id, polygons) = match geometry {
        TopoGeometry::GeometryCollection { geometries } => {
            return geometries.iter().try_for_each(|geometry| collect_features(geometry, arcs, out));
        }
        TopoGeometry::Polygon { arcs: rings, id } => {
            (id, polygon(rings, arcs)?.into_iter().collect::<Vec<_>>())
        }
        TopoGeometry::MultiPolygon { arcs: polygons, id } => {
            let polygons = polygons.iter()
                .filter_map(|rings| polygon(rings, arcs).transpose())
                .collect::<Result<Vec<_>>>()?;
            (id, polygons)
        }
        _ => return Ok(()),
    };

    let id = id.clone()
        .ok_or_else(|| Error::Topology("polygon geometry without an id".to_string()))?;
    out.push(RegionShape { id, geometry: MultiPolygon(polygons) });
    Ok(())
}

fn collect_arc_users(geometry: &TopoGeometry, next: &mut usize, users: &mut [Vec<usize>], arc_count: usize) -> Result<()> {
    let mut record = |references: &[i64], g: usize| -> Result<()> {
        for &reference in references {
            let (i, _) = arc_index(reference);
            let geoms = users.get_mut(i)
                .ok_or_else(|| Error::Topology(format!("arc reference {reference} out of range ({arc_count} arcs)")))?;
            if geoms.last() != Some(&g) { geoms.push(g) }
        }
        Ok(())
    };

    match geometry {
        TopoGeometry::GeometryCollection { geometries } => {
            return geometries.iter().try_for_each(|geometry| collect_arc_users(geometry, next, users, arc_count));
        }
        TopoGeometry::LineString { arcs } => record(arcs, *next)?,
        TopoGeometry::MultiLineString { arcs } | TopoGeometry::Polygon { arcs, .. } => {
            arcs.iter().try_for_each(|line| record(line, *next))?
        }
        TopoGeometry::MultiPolygon { arcs, .. } => {
            arcs.iter().flatten().try_for_each(|ring| record(ring, *next))?
        }
        TopoGeometry::Unsupported => return Ok(()),
    }

    *next += 1;
    Ok(())
}
