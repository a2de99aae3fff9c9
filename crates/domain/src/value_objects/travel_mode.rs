//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the route is travelled
///
/// Canonical tokens match the provider's `mode` query values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot
    #[default]
    Walking,
    /// By car
    Driving,
    /// By bicycle
    Bicycling,
    /// By public transport
    Transit,
}

impl TravelMode {
    /// Map a caller-supplied token through the alias table
    ///
    /// Case and surrounding whitespace are ignored. Returns `None` for tokens
    /// outside the table, including the empty string.
    #[must_use]
    pub fn normalize(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "walk" | "walking" => Some(Self::Walking),
            "drive" | "driving" => Some(Self::Driving),
            "bike" | "bicycle" | "bicycling" => Some(Self::Bicycling),
            "transit" => Some(Self::Transit),
            _ => None,
        }
    }

    /// Canonical lower-case token sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }

    /// Upper-case label echoed in responses
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Walking => "WALKING",
            Self::Driving => "DRIVING",
            Self::Bicycling => "BICYCLING",
            Self::Transit => "TRANSIT",
        }
    }

    /// Get all modes
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Walking, Self::Driving, Self::Bicycling, Self::Transit]
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
