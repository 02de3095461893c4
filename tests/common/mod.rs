// Shared fixtures: a 2x2 grid of counties split across two states.
//
//   +------+------+
//   | 1001 | 1003 |   state 01
//   +------+------+
//   | 2001 | 2003 |   state 02
//   +------+------+
//
// Coordinates are planar, 20x20 units, y down. With the default settings the
// wide layout fits the grid to a 480x480 square at x 270..750, y 30..510.
#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use choropleth::{Choropleth, Dataset, Settings, Source, SvgSurface, TitleBlock};

pub const TOPOLOGY: &str = r#"{
    "type": "Topology",
    "objects": {
        "counties": {"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "arcs": [[0, 1, 2]], "id": 1001},
            {"type": "Polygon", "arcs": [[3, 4, -1]], "id": 1003},
            {"type": "Polygon", "arcs": [[-2, 5, 6]], "id": 2001},
            {"type": "Polygon", "arcs": [[-5, 7, -6]], "id": 2003}
        ]},
        "states": {"type": "GeometryCollection", "geometries": [
            {"type": "Polygon", "arcs": [[3, 4, 1, 2]], "id": 1},
            {"type": "Polygon", "arcs": [[-2, -5, 7, 6]], "id": 2}
        ]}
    },
    "arcs": [
        [[10, 0], [10, 10]],
        [[10, 10], [0, 10]],
        [[0, 10], [0, 0], [10, 0]],
        [[10, 0], [20, 0], [20, 10]],
        [[20, 10], [10, 10]],
        [[10, 10], [10, 20]],
        [[10, 20], [0, 20], [0, 10]],
        [[20, 10], [20, 20], [10, 20]]
    ]
}"#;

pub const STATISTICS: &str = r#"[
    {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 21.4},
    {"fips": 1003, "state": "AL", "area_name": "Baldwin County", "bachelorsOrHigher": 28.6},
    {"fips": 2001, "state": "AK", "area_name": "Aleutians East", "bachelorsOrHigher": 10.1},
    {"fips": 2003, "state": "AK", "area_name": "Anchorage", "bachelorsOrHigher": 34.5}
]"#;

/// Statistics without a record for county 2003.
pub const STATISTICS_INCOMPLETE: &str = r#"[
    {"fips": 1001, "state": "AL", "area_name": "Autauga County", "bachelorsOrHigher": 21.4},
    {"fips": 1003, "state": "AL", "area_name": "Baldwin County", "bachelorsOrHigher": 28.6},
    {"fips": 2001, "state": "AK", "area_name": "Aleutians East", "bachelorsOrHigher": 10.1}
]"#;

pub fn dataset() -> Dataset {
    Dataset::from_slices(TOPOLOGY.as_bytes(), STATISTICS.as_bytes(), &Settings::default()).unwrap()
}

pub fn app() -> Choropleth<SvgSurface> {
    Choropleth::new(Arc::new(dataset()), Settings::default(), TitleBlock::default(), SvgSurface::new())
}

/// Write both documents into `dir` and return file sources for them.
pub fn write_inputs(dir: &Path, statistics: &str) -> (Source, Source) {
    let topology_path = dir.join("counties.topo.json");
    let statistics_path = dir.join("education.json");
    std::fs::write(&topology_path, TOPOLOGY).unwrap();
    std::fs::write(&statistics_path, statistics).unwrap();
    (Source::Path(topology_path), Source::Path(statistics_path))
}
