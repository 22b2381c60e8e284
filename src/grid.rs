use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::attributes::TileAttributeSource;
use crate::hex::HexCoord;
use crate::tile::Tile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid radius must be non-negative, got {0}")]
    NegativeRadius(i32),
}

/// Number of tiles in a hexagonal region of the given radius.
pub fn tile_count_for_radius(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Hexagon-shaped grid of tiles keyed by axial coordinate.
///
/// Holds exactly the coordinates with `max(|q|, |r|, |s|) <= radius`.
#[derive(Debug, Clone)]
pub struct HexGrid {
    radius: i32,
    tiles: HashMap<HexCoord, Tile>,
}

impl HexGrid {
    pub fn generate(
        radius: i32,
        source: &mut impl TileAttributeSource,
    ) -> Result<Self, GridError> {
        if radius < 0 {
            return Err(GridError::NegativeRadius(radius));
        }

        let mut tiles = HashMap::with_capacity(tile_count_for_radius(radius.unsigned_abs()));
        for q in -radius..=radius {
            // Clamping r against both bounds keeps |s| <= radius, giving a
            // hexagon rather than a rhombus.
            let r_min = (-radius).max(-q - radius);
            let r_max = radius.min(-q + radius);
            for r in r_min..=r_max {
                let coord = HexCoord::new(q, r);
                tiles.insert(coord, Tile::new(coord, source.attributes_for(coord)));
            }
        }

        debug!(radius, tiles = tiles.len(), "generated hex grid");
        Ok(Self { radius, tiles })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    pub fn tile(&self, coord: HexCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn tile_mut(&mut self, coord: HexCoord) -> Option<&mut Tile> {
        self.tiles.get_mut(&coord)
    }

    pub fn get_tile(&self, q: i32, r: i32) -> Option<&Tile> {
        self.tile(HexCoord::new(q, r))
    }

    /// Coordinates in generation order (q-major, then r).
    pub fn coords(&self) -> Vec<HexCoord> {
        let mut coords: Vec<_> = self.tiles.keys().copied().collect();
        coords.sort();
        coords
    }

    /// Tiles in generation order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.coords()
            .into_iter()
            .filter_map(move |coord| self.tiles.get(&coord))
    }

    /// Adjacent tiles that exist in the grid; edge tiles have fewer than six.
    pub fn neighbors(&self, coord: HexCoord) -> Vec<&Tile> {
        coord
            .neighbors()
            .iter()
            .filter_map(|neighbor| self.tiles.get(neighbor))
            .collect()
    }
}
