pub mod attributes;
pub mod config;
pub mod grid;
pub mod hex;
pub mod pipeline;
pub mod render;
pub mod rng;
pub mod simulation;
pub mod tile;

pub use config::{ConfigLoader, MapConfig};
pub use grid::{GridError, HexGrid};
pub use hex::{HexCoord, HexDirection};
pub use pipeline::{Pipeline, PipelineOutput};
pub use simulation::{ElevationSimulator, Projection, ProjectionError};
pub use tile::{Agriculture, NaturalResource, Tile, TileAttributes};
