use std::path::PathBuf;

/// Choropleth map renderer
#[derive(clap::Parser, Debug)]
#[command(name = "choropleth", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the map to an SVG file
    Render(RenderArgs),

    /// Render in memory, then report the region under a canvas point
    Inspect(InspectArgs),
}

/// Where the two input documents come from: file paths or http(s) URLs.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// TopoJSON topology with region and boundary objects
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub topology: String,

    /// JSON array of per-region statistics records
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub statistics: String,

    /// Topology object holding one shape per statistic
    #[arg(long, default_value = "counties")]
    pub fine_object: String,

    /// Topology object holding the coarse administrative borders
    #[arg(long, default_value = "states")]
    pub coarse_object: String,

    #[arg(long, value_enum, default_value_t = PaletteArg::Blues)]
    pub palette: PaletteArg,

    #[arg(long, value_enum, default_value_t = ProjectionArg::Planar)]
    pub projection: ProjectionArg,
}

/// Viewport the map is laid out for.
#[derive(clap::Args, Debug)]
pub struct ViewportArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,

    /// Height reserved above the map for the page title, margins included
    #[arg(long, default_value_t = 0.0)]
    pub title_height: f64,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Output SVG file, defaults to "./choropleth.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Canvas x coordinate to hit-test
    #[arg(long)]
    pub x: f64,

    /// Canvas y coordinate to hit-test
    #[arg(long)]
    pub y: f64,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum PaletteArg {
    Blues,
    RdYlBu,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ProjectionArg {
    /// Coordinates are already screen-like, y down
    Planar,
    /// Longitude/latitude degrees
    Geographic,
}

impl InputArgs {
    pub fn settings(&self) -> choropleth::Settings {
        choropleth::Settings {
            fine_object: self.fine_object.clone(),
            coarse_object: self.coarse_object.clone(),
            palette: match self.palette {
                PaletteArg::Blues => choropleth::Palette::Blues,
                PaletteArg::RdYlBu => choropleth::Palette::RdYlBu,
            },
            projection: match self.projection {
                ProjectionArg::Planar => choropleth::ProjectionKind::Planar,
                ProjectionArg::Geographic => choropleth::ProjectionKind::Geographic,
            },
            ..Default::default()
        }
    }

    pub fn sources(&self) -> (choropleth::Source, choropleth::Source) {
        (choropleth::Source::parse(&self.topology), choropleth::Source::parse(&self.statistics))
    }
}

impl ViewportArgs {
    pub fn viewport(&self) -> choropleth::Viewport {
        choropleth::Viewport::new(self.width, self.height)
    }

    pub fn title(&self) -> choropleth::TitleBlock {
        choropleth::TitleBlock { height: self.title_height, ..Default::default() }
    }
}
