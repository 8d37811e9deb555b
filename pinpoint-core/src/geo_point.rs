//! Immutable WGS84 positions and the distance measure used for scoring.

use geo::{Coord, Distance, Haversine, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
///
/// Points serialise as `[lat, lon]` arrays, matching the way rounds are
/// authored. Deserialisation runs the same validation as [`GeoPoint::new`].
///
/// # Examples
///
/// ```
/// use pinpoint_core::GeoPoint;
///
/// # fn main() -> Result<(), pinpoint_core::GeoPointError> {
/// let station = GeoPoint::new(-23.62909, -46.56753)?;
/// assert_eq!(station.lat(), -23.62909);
/// assert_eq!(station.distance_to(&station), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {0} must be a finite value between -90 and 90")]
    InvalidLatitude(f64),
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {0} must be a finite value between -180 and 180")]
    InvalidLongitude(f64),
}

impl GeoPoint {
    /// Validate and construct a [`GeoPoint`].
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either component is out of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoPointError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// Uses the haversine formula on a spherical Earth, which is what web map
    /// surfaces report for marker distances.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        Haversine.distance(Point::from(*self), Point::from(*other))
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = GeoPointError;

    fn try_from([lat, lon]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lat, lon)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lon]
    }
}

// `geo` uses `x = longitude`, `y = latitude`.
impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self::from(Coord::from(point))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
