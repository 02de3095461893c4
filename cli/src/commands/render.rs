use std::path::PathBuf;

use anyhow::{Context, Result};
use choropleth::{Choropleth, SvgSurface};

pub async fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let out_path: PathBuf = args.output.clone().unwrap_or("./choropleth.svg".into());
    let (topology, statistics) = args.input.sources();
    let viewport = args.viewport.viewport();

    let mut surface = SvgSurface::new();
    let result = async {
        let mut map = Choropleth::load(&topology, &statistics, args.input.settings(), args.viewport.title(), &mut surface, viewport)
            .await
            .context("failed to load map data")?;
        let frame = map.redraw(viewport).context("failed to render map")?;
        tracing::info!(preset = ?frame.layout.preset, width = frame.layout.width, height = frame.layout.height,
            regions = frame.shapes.len(), "rendered map");
        anyhow::Ok(())
    }.await;

    // the failure state is still a complete document, so it is written either way
    surface.write_to_path(&out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!(path = %out_path.display(), failed = result.is_err(), "wrote map");
    println!("[render] wrote {}", out_path.display());

    result
}
