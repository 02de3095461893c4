use geo::{Coord, Rect};

use crate::settings::Settings;

/// Browser viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Measured page heading: its rendered height plus vertical margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TitleBlock {
    pub height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl TitleBlock {
    #[inline] pub fn total(&self) -> f64 { self.height + self.margin_top + self.margin_bottom }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Wide,
    Narrow,
}

/// Canvas size and padding for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub preset: Preset,
}

impl Layout {
    /// Canvas area left for the map once padding is removed.
    pub fn inner(&self) -> Rect<f64> {
        let min = Coord { x: self.padding.left, y: self.padding.top };
        let max = Coord {
            x: (self.width - self.padding.right).max(min.x),
            y: (self.height - self.padding.bottom).max(min.y),
        };
        Rect::new(min, max)
    }
}

/// Chooses between the wide and narrow layout presets.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    settings: Settings,
}

impl LayoutEngine {
    pub fn new(settings: Settings) -> Self { Self { settings } }

    /// Wide preset when the viewport is at least as wide as the threshold, narrow otherwise.
    pub fn compute(&self, viewport: Viewport, title: TitleBlock) -> Layout {
        let s = &self.settings;
        if viewport.width < s.wide_threshold() {
            Layout {
                width: (viewport.width - 2.0 * s.wrap_margin).max(0.0),
                height: (viewport.height - title.total() - 2.0 * s.wrap_margin).max(0.0),
                padding: s.min_padding,
                preset: Preset::Narrow,
            }
        } else {
            Layout {
                width: s.max_width,
                height: s.max_height,
                padding: s.max_padding,
                preset: Preset::Wide,
            }
        }
    }
}
