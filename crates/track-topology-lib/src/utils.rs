//! Utility functions for coordinate projection and handle vector math

use crate::{Config, Result, TopologyError};
use geo::{Coord, Point};
use glam::Vec3;

/// Approximate mean Earth radius in meters
pub const EARTH_RADIUS_APPROX: f64 = 6371008.7714;

/// Correction scalar applied to both projected axes.
///
/// This is a fixed constant and does not depend on latitude, so projected
/// distances drift slightly the further a point is from the origin.
pub const SCALE_CORRECTION: f64 = 2.0 / 3.0;

/// Precomputed constant: PI / 180.0
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

const PI_OVER_2: f64 = std::f64::consts::FRAC_PI_2;

/// Project latitude/longitude deltas (in degrees) onto a plane
///
/// All math is done in `f64`. The returned coordinate holds the easting in `x`
/// and the northing in `y`, which becomes `z` once placed in the 3D scene.
///
/// # Arguments
/// * `lat` - Latitude delta from the origin in degrees, strictly within (-90, 90)
/// * `lon` - Longitude delta from the origin in degrees
/// * `radius` - Sphere radius in meters
#[inline(always)]
pub fn project_coords(lat: f64, lon: f64, radius: f64) -> Coord<f64> {
    // Mercator, with the northing stretched by PI/2 so the result is not squished
    let x = radius * lon * DEG_TO_RAD * SCALE_CORRECTION;
    let y = radius * ((45.0 + lat / 2.0) * DEG_TO_RAD).tan().ln() * PI_OVER_2 * SCALE_CORRECTION;
    Coord { x, y }
}

/// Project a WGS84 (lat, lon) pair into the local plane around an origin
///
/// # Returns
/// A tuple of (x, z) in meters, narrowed to `f32`
#[inline(always)]
pub fn project(lat: f64, lon: f64, origin_lat: f64, origin_lon: f64) -> (f32, f32) {
    let coord = project_coords(lat - origin_lat, lon - origin_lon, EARTH_RADIUS_APPROX);
    (coord.x as f32, coord.y as f32)
}

/// Projects geographic points into scene positions around a fixed origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    /// Origin of the local plane (x = longitude, y = latitude)
    origin: Point<f64>,
    /// Offset added to every projected position
    offset: Vec3,
    /// Sphere radius in meters
    radius: f64,
}

impl Projector {
    /// Create a projector centered on `origin` with no offset
    pub fn new(origin: Point<f64>) -> Self {
        Self {
            origin,
            offset: Vec3::ZERO,
            radius: EARTH_RADIUS_APPROX,
        }
    }

    /// Create a projector from the origin and offset in a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Point::new(config.origin_lon, config.origin_lat))
            .with_offset(config.origin_offset)
    }

    /// Shift every projected position by `offset`
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub fn origin(&self) -> Point<f64> {
        self.origin
    }

    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Project a WGS84 point into a scene position (height zero before the offset)
    ///
    /// Rejects latitudes whose delta from the origin reaches ±90 degrees, since
    /// the projection is not finite there.
    pub fn project_point(&self, lat: f64, lon: f64) -> Result<Vec3> {
        let delta_lat = lat - self.origin.y();
        if !delta_lat.is_finite() || delta_lat.abs() >= 90.0 {
            return Err(TopologyError::InvalidLatitude { lat });
        }
        let delta_lon = lon - self.origin.x();
        if !delta_lon.is_finite() {
            return Err(TopologyError::InvalidLongitude { lon });
        }

        let coord = project_coords(delta_lat, delta_lon, self.radius);
        Ok(Vec3::new(coord.x as f32, 0.0, coord.y as f32) + self.offset)
    }
}

/// Normalized average of two directions
#[inline]
pub fn average_direction(a: Vec3, b: Vec3) -> Vec3 {
    ((a + b) * 0.5).normalize_or_zero()
}

/// Zero the vertical component without restoring the original length
#[inline]
pub fn flatten_no_resize(mut v: Vec3) -> Vec3 {
    v.y = 0.0;
    v
}

/// Zero the vertical component, keeping the original length
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    let length = v.length();
    flatten_no_resize(v).normalize_or_zero() * length
}

/// Vertical component of `a × b`
///
/// Negative when `b` turns left of `a` seen from above (x east, z north).
#[inline]
pub fn vertical_cross(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).y
}
