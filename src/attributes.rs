//! Attribute generation strategies used while building a grid

use rand::seq::SliceRandom;
use rand::Rng;

use crate::hex::HexCoord;
use crate::tile::{Agriculture, NaturalResource, TileAttributes};

pub const ELEVATION_RANGE: std::ops::Range<f64> = 0.0..100.0;
pub const TEMPERATURE_RANGE: std::ops::Range<f64> = -30.0..50.0;

/// Supplies the initial attributes for each tile as the grid is generated.
pub trait TileAttributeSource {
    fn attributes_for(&mut self, coord: HexCoord) -> TileAttributes;
}

/// Independent uniform draws per field from the wrapped generator.
pub struct RandomAttributes<R> {
    rng: R,
}

impl<R: Rng> RandomAttributes<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileAttributeSource for RandomAttributes<R> {
    fn attributes_for(&mut self, _coord: HexCoord) -> TileAttributes {
        let elevation = self.rng.gen_range(ELEVATION_RANGE);
        let temperature = self.rng.gen_range(TEMPERATURE_RANGE);
        let natural_resource = *NaturalResource::ALL
            .choose(&mut self.rng)
            .unwrap_or(&NaturalResource::None);
        let agriculture = *Agriculture::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Agriculture::None);
        TileAttributes {
            elevation,
            temperature,
            natural_resource,
            agriculture,
        }
    }
}
