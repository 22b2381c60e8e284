//! Toy tectonics: a single radial peak at the grid centre.
//!
//! Axial coordinates are mapped onto synthetic longitude/latitude
//! (`q * scale`, `r * scale`), a placeholder rather than real geodesy, then
//! flattened with an azimuthal-equidistant projection centred on (0, 0).
//! Elevation falls off linearly with planar distance from the centre.

use geo::{Bearing, Distance, Geodesic, Point};
use thiserror::Error;
use tracing::debug;

use crate::grid::HexGrid;
use crate::hex::HexCoord;

pub const DEFAULT_LATLON_SCALE: f64 = 10.0;
pub const PEAK_ELEVATION: f64 = 1000.0;
/// Planar metres per metre of elevation lost.
pub const ELEVATION_FALLOFF: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("coordinate lon={lon}, lat={lat} is outside the WGS84 lat/long domain")]
    OutOfRange { lon: f64, lat: f64 },
    #[error("projection produced a non-finite result for lon={lon}, lat={lat}")]
    NonFinite { lon: f64, lat: f64 },
}

/// Maps WGS84 longitude/latitude in degrees to planar metres.
pub trait Projection {
    fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjectionError>;
}

/// Ellipsoidal azimuthal-equidistant projection built on the geodesic
/// inverse problem: a point at geodesic distance `s` and forward azimuth `a`
/// from the centre lands at `(s sin a, s cos a)`.
#[derive(Debug, Clone, Copy)]
pub struct AzimuthalEquidistant {
    center: Point<f64>,
}

impl AzimuthalEquidistant {
    pub fn new(center_lon: f64, center_lat: f64) -> Result<Self, ProjectionError> {
        check_domain(center_lon, center_lat)?;
        Ok(Self {
            center: Point::new(center_lon, center_lat),
        })
    }
}

impl Default for AzimuthalEquidistant {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
        }
    }
}

impl Projection for AzimuthalEquidistant {
    fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64), ProjectionError> {
        check_domain(lon, lat)?;
        let target = Point::new(lon, lat);
        let distance = Geodesic.distance(self.center, target);
        if distance == 0.0 {
            return Ok((0.0, 0.0));
        }
        let azimuth = Geodesic.bearing(self.center, target).to_radians();
        let (x, y) = (distance * azimuth.sin(), distance * azimuth.cos());
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite { lon, lat });
        }
        Ok((x, y))
    }
}

fn check_domain(lon: f64, lat: f64) -> Result<(), ProjectionError> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ProjectionError::NonFinite { lon, lat });
    }
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(ProjectionError::OutOfRange { lon, lat });
    }
    Ok(())
}

/// Synthetic `(lon, lat)` for a hex.
pub fn hex_to_lonlat(coord: HexCoord, scale: f64) -> (f64, f64) {
    (coord.q as f64 * scale, coord.r as f64 * scale)
}

pub fn elevation_from_planar(x: f64, y: f64) -> f64 {
    (PEAK_ELEVATION - x.hypot(y) / ELEVATION_FALLOFF).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationReport {
    pub tiles_updated: usize,
    pub peak_elevation: f64,
    pub floored_tiles: usize,
}

pub struct ElevationSimulator<P = AzimuthalEquidistant> {
    projection: P,
    latlon_scale: f64,
}

impl ElevationSimulator<AzimuthalEquidistant> {
    pub fn new() -> Self {
        Self::with_projection(AzimuthalEquidistant::default())
    }
}

impl Default for ElevationSimulator<AzimuthalEquidistant> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Projection> ElevationSimulator<P> {
    pub fn with_projection(projection: P) -> Self {
        Self {
            projection,
            latlon_scale: DEFAULT_LATLON_SCALE,
        }
    }

    pub fn with_latlon_scale(mut self, scale: f64) -> Self {
        self.latlon_scale = scale;
        self
    }

    pub fn latlon_scale(&self) -> f64 {
        self.latlon_scale
    }

    pub fn elevation_at(&self, coord: HexCoord) -> Result<f64, ProjectionError> {
        let (lon, lat) = hex_to_lonlat(coord, self.latlon_scale);
        let (x, y) = self.projection.project(lon, lat)?;
        Ok(elevation_from_planar(x, y))
    }

    /// Rewrites every tile's elevation. All projections run before any tile
    /// is touched, so a failure leaves the grid unchanged.
    pub fn simulate(&self, grid: &mut HexGrid) -> Result<SimulationReport, ProjectionError> {
        let elevations = grid
            .coords()
            .into_iter()
            .map(|coord| self.elevation_at(coord).map(|elevation| (coord, elevation)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = SimulationReport {
            tiles_updated: 0,
            peak_elevation: 0.0,
            floored_tiles: 0,
        };
        for (coord, elevation) in elevations {
            if let Some(tile) = grid.tile_mut(coord) {
                tile.set_elevation(elevation);
                report.tiles_updated += 1;
                report.peak_elevation = report.peak_elevation.max(elevation);
                if elevation == 0.0 {
                    report.floored_tiles += 1;
                }
            }
        }

        debug!(
            tiles = report.tiles_updated,
            peak = report.peak_elevation,
            floored = report.floored_tiles,
            "tectonic simulation complete"
        );
        Ok(report)
    }
}
