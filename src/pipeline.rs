use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::attributes::RandomAttributes;
use crate::config::MapConfig;
use crate::grid::HexGrid;
use crate::hex::HexCoord;
use crate::render::{render_ascii, render_summary, SvgRenderer};
use crate::rng::attribute_rng;
use crate::simulation::{ElevationSimulator, SimulationReport};
use crate::tile::Tile;

pub struct PipelineOutput {
    pub grid: HexGrid,
    pub report: SimulationReport,
    pub svg_path: PathBuf,
    pub center: Option<Tile>,
}

/// Generate → simulate → summary → ASCII view → SVG export → centre lookup.
pub struct Pipeline {
    config: MapConfig,
}

impl Pipeline {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    /// Runs every stage in order, writing the text views to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<PipelineOutput> {
        let config = &self.config;
        config.validate()?;

        let mut source = RandomAttributes::new(attribute_rng(config.seed));
        let mut grid = HexGrid::generate(config.radius, &mut source)?;
        info!(radius = config.radius, tiles = grid.len(), seed = ?config.seed, "grid generated");

        let report = ElevationSimulator::new()
            .with_latlon_scale(config.latlon_scale)
            .simulate(&mut grid)
            .context("Tectonic simulation failed")?;
        info!(
            peak = report.peak_elevation,
            floored = report.floored_tiles,
            "elevations simulated"
        );

        write!(out, "{}", render_summary(&grid))?;
        writeln!(out)?;
        writeln!(out, "Visual Representation of the Grid:")?;
        write!(out, "{}", render_ascii(&grid))?;

        SvgRenderer::new(config.hex_size).export(&grid, &config.output)?;
        info!(path = %config.output.display(), "svg exported");

        let center = grid.tile(HexCoord::ORIGIN).cloned();
        writeln!(out)?;
        match &center {
            Some(tile) => writeln!(out, "Specific Tile: {tile}")?,
            None => writeln!(out, "Specific Tile: none")?,
        }

        Ok(PipelineOutput {
            grid,
            report,
            svg_path: config.output.clone(),
            center,
        })
    }
}
