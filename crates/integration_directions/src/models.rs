//! Directions data models
//!
//! Public, flat response types plus the private wire format of the provider
//! envelope and the mapping between the two.

use domain::TravelMode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DirectionsError;
use crate::sanitize::clean_instruction;

const STATUS_OK: &str = "OK";

/// A single route summary with its navigation steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Requested travel mode, upper-case (e.g. `WALKING`)
    pub mode: String,
    /// Route summary, usually the main road names
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Formatted start address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_address: String,
    /// Formatted end address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_address: String,
    /// Human readable total distance
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distance_text: String,
    /// Total distance in meters
    #[serde(default, skip_serializing_if = "is_zero")]
    pub distance_meters: u64,
    /// Human readable total duration
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration_text: String,
    /// Total duration in seconds
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration_seconds: u64,
    /// Route warnings to show the traveller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Steps in travel order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<DirectionsStep>,
}

impl DirectionsResponse {
    /// Total duration in whole minutes, rounded up
    #[must_use]
    pub const fn duration_minutes(&self) -> u64 {
        self.duration_seconds.div_ceil(60)
    }
}

/// A single navigation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsStep {
    /// Plain-text instruction
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instruction: String,
    /// Human readable step distance
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distance_text: String,
    /// Step distance in meters
    #[serde(default, skip_serializing_if = "is_zero")]
    pub distance_meters: u64,
    /// Human readable step duration
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration_text: String,
    /// Step duration in seconds
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration_seconds: u64,
    /// Provider travel mode of this step (e.g. `WALKING`, `TRANSIT`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub travel_mode: String,
    /// Maneuver tag (e.g. `turn-left`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maneuver: String,
}

/// Responses of the same route for two travel modes, in call order
///
/// Serializes as the two-element array `[primary, alternate]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[DirectionsResponse; 2]", into = "[DirectionsResponse; 2]")]
pub struct ModeComparison {
    /// Response for the requested mode
    pub primary: DirectionsResponse,
    /// Response for the comparison mode
    pub alternate: DirectionsResponse,
}

impl From<[DirectionsResponse; 2]> for ModeComparison {
    fn from([primary, alternate]: [DirectionsResponse; 2]) -> Self {
        Self { primary, alternate }
    }
}

impl From<ModeComparison> for [DirectionsResponse; 2] {
    fn from(comparison: ModeComparison) -> Self {
        [comparison.primary, comparison.alternate]
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_zero(value: &u64) -> bool {
    *value == 0
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    error_message: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    #[serde(default)]
    distance: RawValue,
    #[serde(default)]
    duration: RawValue,
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    html_instructions: String,
    #[serde(default)]
    distance: RawValue,
    #[serde(default)]
    duration: RawValue,
    #[serde(default)]
    travel_mode: String,
    #[serde(default)]
    maneuver: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawValue {
    #[serde(default)]
    text: String,
    #[serde(default)]
    value: u64,
}

/// Decode a provider payload into a response for the requested mode
///
/// Only the first route and its first leg are mapped.
///
/// # Errors
///
/// [`DirectionsError::Decode`] for malformed JSON,
/// [`DirectionsError::ProviderStatus`] for a non-`OK` status, and
/// [`DirectionsError::NoResults`] when no route or leg is present.
pub fn map_response(payload: &[u8], mode: TravelMode) -> Result<DirectionsResponse, DirectionsError> {
    let raw: RawDirectionsResponse =
        serde_json::from_slice(payload).map_err(|e| DirectionsError::Decode(e.to_string()))?;

    if raw.status != STATUS_OK {
        warn!(status = %raw.status, "Directions request rejected by provider");
        return Err(DirectionsError::ProviderStatus {
            status: raw.status,
            message: raw.error_message.trim().to_string(),
        });
    }

    let route_count = raw.routes.len();
    let Some(route) = raw.routes.into_iter().next() else {
        return Err(DirectionsError::NoResults);
    };
    let leg_count = route.legs.len();
    let Some(leg) = route.legs.into_iter().next() else {
        return Err(DirectionsError::NoResults);
    };
    if route_count > 1 || leg_count > 1 {
        debug!(route_count, leg_count, "Using first route and leg only");
    }

    Ok(DirectionsResponse {
        mode: mode.label().to_string(),
        summary: route.summary,
        start_address: leg.start_address,
        end_address: leg.end_address,
        distance_text: leg.distance.text,
        distance_meters: leg.distance.value,
        duration_text: leg.duration.text,
        duration_seconds: leg.duration.value,
        warnings: route.warnings,
        steps: leg.steps.into_iter().map(convert_step).collect(),
    })
}

fn convert_step(raw: RawStep) -> DirectionsStep {
    DirectionsStep {
        instruction: clean_instruction(&raw.html_instructions),
        distance_text: raw.distance.text,
        distance_meters: raw.distance.value,
        duration_text: raw.duration.text,
        duration_seconds: raw.duration.value,
        travel_mode: raw.travel_mode,
        maneuver: raw.maneuver,
    }
}
