//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees
///
/// [`LatLng::new`] accepts any pair so that request validation can report
/// which component is out of range; [`LatLng::checked`] enforces the range
/// up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees (-90 to 90)
    lat: f64,
    /// Longitude in degrees (-180 to 180)
    lng: f64,
}

/// Which coordinate component is out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Latitude outside [-90, 90]
    Latitude,
    /// Longitude outside [-180, 180]
    Longitude,
}

impl CoordinateError {
    /// Field suffix used in validation errors (`lat` / `lng`)
    #[must_use]
    pub const fn field_suffix(self) -> &'static str {
        match self {
            Self::Latitude => "lat",
            Self::Longitude => "lng",
        }
    }

    /// Allowed range, as shown to the caller
    #[must_use]
    pub const fn range_message(self) -> &'static str {
        match self {
            Self::Latitude => "must be -90..90",
            Self::Longitude => "must be -180..180",
        }
    }
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field_suffix(), self.range_message())
    }
}

impl std::error::Error for CoordinateError {}

impl LatLng {
    /// Create a coordinate pair without range checks
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate pair, rejecting out-of-range components
    ///
    /// # Errors
    ///
    /// Returns the first component that is out of range, latitude first.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let location = Self::new(lat, lng);
        location.check_range()?;
        Ok(location)
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Verify latitude is in [-90, 90] and longitude in [-180, 180]
    ///
    /// NaN is rejected on either component.
    pub fn check_range(&self) -> Result<(), CoordinateError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::Latitude);
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::Longitude);
        }
        Ok(())
    }

    /// Provider wire form: both components with six decimals
    #[must_use]
    pub fn to_wire(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
