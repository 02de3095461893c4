mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{inspect, render};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the verbosity flags when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match &cli.command {
        Commands::Render(args) => runtime.block_on(render::run(&cli, args)),
        Commands::Inspect(args) => runtime.block_on(inspect::run(&cli, args)),
    }
}

fn main() -> anyhow::Result<()> { run() }
