use geo::{Coord, Rect};

use crate::{
    layout::Layout,
    scale::{ColorScale, LinearScale, Rgb},
    settings::Settings,
    surface::{DrawingSurface, Style, TextAnchor},
};

/// One legend swatch: a palette color and the part of the axis its bucket covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub color: Rgb,
    pub low: f64,
    pub high: f64,
    /// Swatch left edge and width, relative to the legend origin.
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendTick {
    pub x: f64,
    pub label: String,
}

/// Legend geometry as drawn for one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Canvas position of the legend group.
    pub origin: Coord<f64>,
    pub entries: Vec<LegendEntry>,
    pub ticks: Vec<LegendTick>,
}

/// Horizontal bucketed color key placed in the bottom padding band.
#[derive(Debug, Clone, Copy)]
pub struct LegendRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> LegendRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self { Self { settings } }

    pub fn draw<S: DrawingSurface>(&self, scale: &ColorScale, layout: &Layout, surface: &mut S) -> Legend {
        let s = self.settings;
        let origin = Coord {
            x: layout.padding.left,
            y: layout.height - layout.padding.bottom + s.legend_offset,
        };
        let width = layout.inner().width();
        let axis = LinearScale::new(scale.domain(), (0.0, width));

        // a zero-width domain has a single bucket spanning the whole key
        let span = |low: f64, high: f64| {
            if scale.is_degenerate() { (0.0, width) } else { (axis.apply(low), axis.apply(high)) }
        };

        surface.begin_group("legend", (origin.x, origin.y));

        let entries = scale.buckets()
            .map(|bucket| {
                let (x0, x1) = span(bucket.low, bucket.high);
                surface.draw_rect(
                    Rect::new(Coord { x: x0, y: 0.0 }, Coord { x: x1, y: s.legend_swatch_height }),
                    &Style::class("legend-swatch").with_fill(bucket.color),
                );
                LegendEntry { color: bucket.color, low: bucket.low, high: bucket.high, x: x0, width: x1 - x0 }
            })
            .collect();

        let mut thresholds = scale.thresholds();
        thresholds.dedup();
        let ticks = thresholds.into_iter()
            .map(|value| {
                let x = axis.apply(value);
                let top = s.legend_swatch_height;
                surface.draw_line(Coord { x, y: top }, Coord { x, y: top + s.legend_tick_size }, &Style::class("tick"));

                let label = format!("{value:.1}");
                surface.draw_text(
                    Coord { x, y: top + s.legend_tick_size + 12.0 },
                    &label,
                    TextAnchor::Middle,
                    &Style::class("tick-label"),
                );
                LegendTick { x, label }
            })
            .collect();

        surface.end_group();

        Legend { origin, entries, ticks }
    }
}
