use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hexmap::{ConfigLoader, MapConfig, Pipeline};

#[derive(Debug, Parser)]
#[command(author, version, about = "Hex map generator with toy tectonics")]
struct Cli {
    /// Path to a YAML map config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid radius in rings around the centre tile
    #[arg(long)]
    radius: Option<i32>,

    /// Seed for tile attributes (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output SVG file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Hexagon size in SVG pixels
    #[arg(long)]
    hex_size: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => MapConfig::default(),
    };
    if let Some(radius) = cli.radius {
        config.radius = radius;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(hex_size) = cli.hex_size {
        config.hex_size = hex_size;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let output = Pipeline::new(config).run(&mut stdout.lock())?;
    tracing::info!(
        tiles = output.grid.len(),
        svg = %output.svg_path.display(),
        "hex map complete"
    );
    Ok(())
}
