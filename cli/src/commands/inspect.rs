use anyhow::{Context, Result};
use choropleth::{Choropleth, Coord, HostEvent, Popup, SvgSurface};

pub async fn run(_cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    let settings = args.input.settings();
    let (topology, statistics) = args.input.sources();
    let viewport = args.viewport.viewport();

    let mut map = Choropleth::load(&topology, &statistics, settings, args.viewport.title(), SvgSurface::new(), viewport)
        .await
        .context("failed to load map data")?;

    let dataset = map.dataset();
    println!("regions:     {}", dataset.regions().len());
    println!("records:     {}", dataset.statistics().len());
    println!("fine mesh:   {} arcs", dataset.fine_mesh().0.len());
    println!("coarse mesh: {} arcs", dataset.coarse_mesh().0.len());

    let frame = map.redraw(viewport).context("failed to render map")?;
    println!("layout:      {:?} {}x{}", frame.layout.preset, frame.layout.width, frame.layout.height);
    let (min, max) = frame.scale.domain();
    println!("domain:      {min} .. {max}");
    for entry in &frame.legend.entries {
        println!("  {}  {:>8.1} .. {:<8.1}", entry.color, entry.low, entry.high);
    }

    let (x, y) = (args.x, args.y);
    tracing::debug!(x, y, "hit testing");
    map.handle(HostEvent::PointerMove(Coord { x, y }))?;
    match map.popup() {
        Popup::Visible { title, detail, anchor, .. } => {
            println!("({x}, {y}): {title}: {detail} (popup at {:.1}, {:.1})", anchor.x, anchor.y)
        }
        Popup::Hidden => println!("({x}, {y}): no region"),
    }

    Ok(())
}
