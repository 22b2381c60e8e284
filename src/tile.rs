use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalResource {
    None,
    Iron,
    Gold,
    Coal,
    Oil,
}

impl NaturalResource {
    pub const ALL: [NaturalResource; 5] = [
        NaturalResource::None,
        NaturalResource::Iron,
        NaturalResource::Gold,
        NaturalResource::Coal,
        NaturalResource::Oil,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Agriculture {
    None,
    Low,
    Medium,
    High,
}

impl Agriculture {
    pub const ALL: [Agriculture; 4] = [
        Agriculture::None,
        Agriculture::Low,
        Agriculture::Medium,
        Agriculture::High,
    ];
}

/// Attribute values drawn for a tile at generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileAttributes {
    pub elevation: f64,
    pub temperature: f64,
    pub natural_resource: NaturalResource,
    pub agriculture: Agriculture,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub coord: HexCoord,
    /// Metres. Starts in `[0, 100)`, rewritten by the elevation simulator.
    pub elevation: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    pub natural_resource: NaturalResource,
    pub agriculture: Agriculture,
}

impl Tile {
    pub fn new(coord: HexCoord, attributes: TileAttributes) -> Self {
        Self {
            coord,
            elevation: attributes.elevation,
            temperature: attributes.temperature,
            natural_resource: attributes.natural_resource,
            agriculture: attributes.agriculture,
        }
    }

    pub fn set_elevation(&mut self, elevation: f64) {
        self.elevation = elevation.max(0.0);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile(q={}, r={}, s={}, elevation={:.1}, temperature={:.1}, natural_resource={:?}, agriculture={:?})",
            self.coord.q,
            self.coord.r,
            self.coord.s(),
            self.elevation,
            self.temperature,
            self.natural_resource,
            self.agriculture
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_one_decimal() {
        let tile = Tile::new(
            HexCoord::new(1, -2),
            TileAttributes {
                elevation: 42.349,
                temperature: -12.06,
                natural_resource: NaturalResource::Gold,
                agriculture: Agriculture::Medium,
            },
        );

        assert_eq!(
            tile.to_string(),
            "Tile(q=1, r=-2, s=1, elevation=42.3, temperature=-12.1, natural_resource=Gold, agriculture=Medium)"
        );
    }

    #[test]
    fn test_set_elevation_floors_at_zero() {
        let mut tile = Tile::new(
            HexCoord::ORIGIN,
            TileAttributes {
                elevation: 10.0,
                temperature: 0.0,
                natural_resource: NaturalResource::None,
                agriculture: Agriculture::None,
            },
        );
        tile.set_elevation(-5.0);
        assert_eq!(tile.elevation, 0.0);
    }
}
