//! Unit system value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system used by the provider for human-readable distance text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilometers and meters
    #[default]
    Metric,
    /// Miles and feet
    Imperial,
}

impl UnitSystem {
    /// Parse a caller-supplied token, ignoring case and surrounding whitespace
    ///
    /// Only the exact tokens `metric` and `imperial` are accepted.
    #[must_use]
    pub fn normalize(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }

    /// Canonical lower-case token sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
