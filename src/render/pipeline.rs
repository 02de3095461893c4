use geo::Coord;

use crate::{
    data::Dataset,
    error::{Error, Result},
    layout::Layout,
    scale::ColorScale,
    settings::Settings,
    surface::{DrawingSurface, Style, TextAnchor},
};

use super::{Legend, LegendRenderer, MapRenderer, ShapeIndex};

/// Everything one render pass produced, kept for pointer interaction until the next pass.
#[derive(Debug, Clone)]
pub struct Frame {
    pub layout: Layout,
    pub scale: ColorScale,
    pub shapes: ShapeIndex,
    pub legend: Legend,
}

/// One full render pass: clear the surface, then draw the map and its legend.
pub fn render<S: DrawingSurface>(
    dataset: &Dataset,
    layout: Layout,
    settings: &Settings,
    surface: &mut S,
) -> Result<Frame> {
    surface.clear(layout.width, layout.height);

    let scale = ColorScale::new(dataset.statistics().values(), settings.palette)?;
    let shapes = MapRenderer::new(settings).draw(dataset, &scale, &layout, surface)?;
    let legend = LegendRenderer::new(settings).draw(&scale, &layout, surface);

    tracing::debug!(
        width = layout.width,
        height = layout.height,
        preset = ?layout.preset,
        shapes = shapes.len(),
        "render pass complete",
    );

    Ok(Frame { layout, scale, shapes, legend })
}

/// Replace whatever is on the surface with a visible failure message.
pub fn draw_failure<S: DrawingSurface>(surface: &mut S, width: f64, height: f64, err: &Error) {
    surface.clear(width, height);
    surface.draw_text(
        Coord { x: width / 2.0, y: height / 2.0 },
        &format!("Unable to render map: {err}"),
        TextAnchor::Middle,
        &Style::class("failure"),
    );
}
