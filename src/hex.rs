//! Hex coordinates - axial storage, cube semantics

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("cube coordinate ({q}, {r}, {s}) does not satisfy q + r + s = 0")]
    NotOnPlane { q: i32, r: i32, s: i32 },
}

/// Axial hex position. The third cube component `s` is always `-q - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

/// The six neighbor directions, counter-clockwise starting east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::NorthWest,
        HexDirection::West,
        HexDirection::SouthWest,
        HexDirection::SouthEast,
    ];

    /// Axial offset `(dq, dr)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            HexDirection::East => (1, 0),
            HexDirection::NorthEast => (1, -1),
            HexDirection::NorthWest => (0, -1),
            HexDirection::West => (-1, 0),
            HexDirection::SouthWest => (-1, 1),
            HexDirection::SouthEast => (0, 1),
        }
    }
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Build from all three cube components, rejecting points off the plane.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q + r + s != 0 {
            return Err(HexError::NotOnPlane { q, r, s });
        }
        Ok(Self { q, r })
    }

    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    pub fn to_cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    pub fn neighbor(self, direction: HexDirection) -> HexCoord {
        let (dq, dr) = direction.offset();
        HexCoord::new(self.q + dq, self.r + dr)
    }

    pub fn neighbors(self) -> [HexCoord; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Cube distance: the number of steps between two hexes.
    pub fn distance(self, other: HexCoord) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Which ring around the origin this hex sits on.
    pub fn ring_index(self) -> u32 {
        self.distance(HexCoord::ORIGIN)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}
