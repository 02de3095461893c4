// End-to-end render passes: documents on disk through to a serialized SVG.

mod common;

use choropleth::{
    Choropleth, Document, Error, Palette, Preset, Settings, Source, SvgSurface, TitleBlock, Viewport,
};

const WIDE: Viewport = Viewport { width: 1280.0, height: 800.0 };

#[tokio::test]
async fn renders_map_meshes_and_legend_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let (topology, statistics) = common::write_inputs(dir.path(), common::STATISTICS);

    let mut map = Choropleth::load(&topology, &statistics, Settings::default(), TitleBlock::default(), SvgSurface::new(), WIDE)
        .await
        .unwrap();
    let frame = map.redraw(WIDE).unwrap();

    assert_eq!(frame.layout.preset, Preset::Wide);
    assert_eq!(frame.shapes.len(), 4);
    assert_eq!(frame.scale.domain(), (10.1, 34.5));

    let surface = map.surface();
    assert_eq!(surface.count(Some("region")), 4);
    assert_eq!(surface.count(Some("mesh-fine")), 1);
    assert_eq!(surface.count(Some("mesh-coarse")), 1);
    assert_eq!(surface.count(Some("legend-swatch")), 9);
    assert_eq!(surface.count(Some("failure")), 0);

    assert_eq!(map.dataset().fine_mesh().0.len(), 4);
    assert_eq!(map.dataset().coarse_mesh().0.len(), 2);

    let out = dir.path().join("map.svg");
    map.surface().write_to_path(&out).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"<g id="map""#));
    assert!(svg.contains(r#"<g id="legend" transform="translate(40,545)">"#));
}

#[tokio::test]
async fn every_region_color_maps_back_to_a_bucket_holding_its_value() {
    let dataset = common::dataset();
    let mut map = common::app();
    let frame = map.redraw(WIDE).unwrap();

    for record in dataset.statistics().records() {
        let color = frame.scale.color_of(record.value);
        let (low, high) = frame.scale.bucket_bounds_of(color).unwrap();
        assert!(low <= record.value && record.value <= high, "{} not in {low}..{high}", record.value);
    }

    // extremes land in the first and last buckets
    let colors = Palette::Blues.colors();
    assert_eq!(frame.scale.color_of(10.1), colors[0]);
    assert_eq!(frame.scale.color_of(34.5), colors[colors.len() - 1]);
}

#[tokio::test]
async fn missing_statistics_record_shows_failure_without_regions() {
    let dir = tempfile::tempdir().unwrap();
    let (topology, statistics) = common::write_inputs(dir.path(), common::STATISTICS_INCOMPLETE);

    let mut map = Choropleth::load(&topology, &statistics, Settings::default(), TitleBlock::default(), SvgSurface::new(), WIDE)
        .await
        .unwrap();
    let err = map.redraw(WIDE).unwrap_err();

    assert!(matches!(err, Error::Join { ref region } if region.as_str() == "2003"));
    assert_eq!(map.surface().count(Some("region")), 0);
    assert_eq!(map.surface().count(Some("failure")), 1);
    assert!(map.surface().to_svg_string().unwrap().contains("Unable to render map: region 2003"));
}

#[tokio::test]
async fn missing_topology_file_is_a_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let (_, statistics) = common::write_inputs(dir.path(), common::STATISTICS);
    let topology = Source::Path(dir.path().join("nope.json"));

    let mut surface = SvgSurface::new();
    let err = Choropleth::load(&topology, &statistics, Settings::default(), TitleBlock::default(), &mut surface, WIDE)
        .await
        .map(drop)
        .unwrap_err();

    assert!(matches!(err, Error::Fetch { document: Document::Topology, .. }));
    assert_eq!(surface.count(Some("failure")), 1);
}

#[tokio::test]
async fn malformed_statistics_is_a_parse_error() {
    let topology = Source::from(common::TOPOLOGY.as_bytes().to_vec());
    let statistics = Source::from(br#"{"fips": 1001}"#.to_vec());

    let err = Choropleth::load(&topology, &statistics, Settings::default(), TitleBlock::default(), SvgSurface::new(), WIDE)
        .await
        .map(drop)
        .unwrap_err();

    assert!(matches!(err, Error::Parse { document: Document::Statistics, .. }));
}

#[tokio::test]
async fn empty_statistics_is_rejected() {
    let topology = Source::from(common::TOPOLOGY.as_bytes().to_vec());
    let statistics = Source::from(b"[]".to_vec());

    let err = Choropleth::load(&topology, &statistics, Settings::default(), TitleBlock::default(), SvgSurface::new(), WIDE)
        .await
        .map(drop)
        .unwrap_err();

    assert!(matches!(err, Error::EmptyStatistics));
}

#[test]
fn narrow_viewport_fits_the_window() {
    let title = TitleBlock { height: 40.0, margin_top: 10.0, margin_bottom: 10.0 };
    let mut map = Choropleth::new(
        std::sync::Arc::new(common::dataset()),
        Settings::default(),
        title,
        SvgSurface::new(),
    );
    let frame = map.redraw(Viewport::new(800.0, 700.0)).unwrap();

    assert_eq!(frame.layout.preset, Preset::Narrow);
    assert_eq!((frame.layout.width, frame.layout.height), (770.0, 610.0));
    assert_eq!(map.surface().size(), (770.0, 610.0));
}
