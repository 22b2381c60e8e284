use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use svg::node::element::Polygon;
use svg::Document;
use thiserror::Error;
use tracing::debug;

use crate::grid::HexGrid;
use crate::hex::HexCoord;

pub const DEFAULT_HEX_SIZE: f64 = 20.0;

pub const COLOR_HIGH: &str = "#8B0000";
pub const COLOR_MEDIUM: &str = "#FFA500";
pub const COLOR_LOW: &str = "#00FF00";

const STROKE: &str = "black";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write SVG to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Pixel centre of a hex in the flat-top layout.
pub fn hex_to_pixel(coord: HexCoord, size: f64) -> Point2 {
    let q = coord.q as f64;
    let r = coord.r as f64;
    Point2 {
        x: size * 1.5 * q,
        y: size * 3f64.sqrt() * (r + q / 2.0),
    }
}

/// Hexagon vertices at 0°, 60°, ... 300° around `center`.
pub fn hex_corners(center: Point2, size: f64) -> [Point2; 6] {
    std::array::from_fn(|i| {
        let angle = PI / 3.0 * i as f64;
        Point2 {
            x: center.x + size * angle.cos(),
            y: center.y + size * angle.sin(),
        }
    })
}

pub fn elevation_color(elevation: f64) -> &'static str {
    if elevation > 800.0 {
        COLOR_HIGH
    } else if elevation > 400.0 {
        COLOR_MEDIUM
    } else {
        COLOR_LOW
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    hex_size: f64,
    margin: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HEX_SIZE)
    }
}

impl SvgRenderer {
    pub fn new(hex_size: f64) -> Self {
        Self {
            hex_size,
            margin: hex_size / 2.0,
        }
    }

    /// One filled, black-stroked polygon per tile, with a view box that
    /// covers every polygon.
    pub fn document(&self, grid: &HexGrid) -> Document {
        let mut document = Document::new()
            .set("version", "1.2")
            .set("baseProfile", "tiny");
        let mut min = Point2 { x: 0.0, y: 0.0 };
        let mut max = Point2 { x: 0.0, y: 0.0 };

        for tile in grid.tiles() {
            let corners = hex_corners(hex_to_pixel(tile.coord, self.hex_size), self.hex_size);
            for corner in &corners {
                min.x = min.x.min(corner.x);
                min.y = min.y.min(corner.y);
                max.x = max.x.max(corner.x);
                max.y = max.y.max(corner.y);
            }
            let points = corners
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            document = document.add(
                Polygon::new()
                    .set("points", points)
                    .set("fill", elevation_color(tile.elevation))
                    .set("stroke", STROKE),
            );
        }

        document.set(
            "viewBox",
            (
                min.x - self.margin,
                min.y - self.margin,
                max.x - min.x + 2.0 * self.margin,
                max.y - min.y + 2.0 * self.margin,
            ),
        )
    }

    pub fn render_to_string(&self, grid: &HexGrid) -> String {
        self.document(grid).to_string()
    }

    pub fn export(&self, grid: &HexGrid, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        svg::save(path, &self.document(grid)).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), tiles = grid.len(), "wrote SVG map");
        Ok(())
    }
}
