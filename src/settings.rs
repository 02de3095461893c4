use std::time::Duration;

use crate::{layout::Padding, render::ProjectionKind, scale::Palette};

/// Fixed design constants for one map.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Canvas width of the wide layout.
    pub max_width: f64,
    /// Canvas height of the wide layout.
    pub max_height: f64,
    /// Padding of the wide layout.
    pub max_padding: Padding,
    /// Padding of the narrow (fit-to-window) layout.
    pub min_padding: Padding,
    /// Margin kept around the canvas on every side in the narrow layout.
    pub wrap_margin: f64,
    /// Quiet interval before a burst of resize events triggers a redraw.
    pub debounce: Duration,
    /// Upper bound on loading both input documents.
    pub fetch_timeout: Duration,
    pub palette: Palette,
    pub projection: ProjectionKind,
    /// Topology object holding the fine-grained regions (one shape per statistic).
    pub fine_object: String,
    /// Topology object holding the coarse administrative regions.
    pub coarse_object: String,
    /// Vertical gap between the legend and the bottom edge of the map area.
    pub legend_offset: f64,
    pub legend_swatch_height: f64,
    pub legend_tick_size: f64,
    /// Gap between a hovered shape's top edge and the popup anchor.
    pub popup_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_width: 1000.0,
            max_height: 600.0,
            max_padding: Padding { top: 30.0, right: 20.0, bottom: 90.0, left: 40.0 },
            min_padding: Padding { top: 30.0, right: 20.0, bottom: 90.0, left: 40.0 },
            wrap_margin: 15.0,
            debounce: Duration::from_millis(100),
            fetch_timeout: Duration::from_secs(30),
            palette: Palette::Blues,
            projection: ProjectionKind::Planar,
            fine_object: "counties".to_string(),
            coarse_object: "states".to_string(),
            legend_offset: 35.0,
            legend_swatch_height: 10.0,
            legend_tick_size: 6.0,
            popup_offset: 10.0,
        }
    }
}

impl Settings {
    /// Viewport width below which the narrow layout is used.
    #[inline]
    pub fn wide_threshold(&self) -> f64 {
        self.max_width + self.max_padding.left + self.max_padding.right
    }
}
