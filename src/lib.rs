#![doc = "Choropleth public API"]
mod app;
mod data;
mod error;
mod interaction;
mod io;
mod layout;
mod region;
mod render;
mod scale;
mod settings;
mod surface;

#[doc(inline)]
pub use app::{Choropleth, HostEvent};

#[doc(inline)]
pub use data::{Dataset, MeshFilter, RegionShape, Source, StatisticRecord, Statistics, Topology};

#[doc(inline)]
pub use error::{Document, Error, Result};

#[doc(inline)]
pub use interaction::{InteractionLayer, Popup};

#[doc(inline)]
pub use io::svg::SvgSurface;

#[doc(inline)]
pub use layout::{Debouncer, Layout, LayoutEngine, Padding, Preset, TitleBlock, Viewport};

#[doc(inline)]
pub use region::{join, Region, RegionId};

#[doc(inline)]
pub use render::{
    draw_failure, render, Frame, Legend, LegendEntry, LegendRenderer, LegendTick,
    MapRenderer, Projection, ProjectionKind, ShapeIndex, ShapeMeta,
};

#[doc(inline)]
pub use scale::{ColorBucket, ColorScale, LinearScale, Palette, Rgb};

#[doc(inline)]
pub use settings::Settings;

#[doc(inline)]
pub use surface::{DrawingSurface, ElementId, PathData, Style, TextAnchor};

pub use geo::{Coord, Rect};
