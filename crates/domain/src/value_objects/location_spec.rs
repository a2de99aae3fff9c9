//! Resolved location form for one route endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LatLng;

/// Exactly one way of naming an origin or destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSpec {
    /// Free-text address or place name
    Text(String),
    /// Opaque provider place identifier
    PlaceId(String),
    /// Coordinate pair
    Coordinate(LatLng),
}

impl LocationSpec {
    /// Provider wire form for the `origin` / `destination` query values
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::PlaceId(id) => format!("place_id:{}", id.trim()),
            Self::Coordinate(location) => location.to_wire(),
        }
    }

    /// Get the variant name as used in validation messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::PlaceId(_) => "place_id",
            Self::Coordinate(_) => "lat/lng",
        }
    }
}

impl fmt::Display for LocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<LatLng> for LocationSpec {
    fn from(location: LatLng) -> Self {
        Self::Coordinate(location)
    }
}
