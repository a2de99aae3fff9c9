//! Directions request normalization, validation, and location resolution
//!
//! A [`DirectionsRequest`] is what the caller hands in. It is first
//! [`normalize`](DirectionsRequest::normalize)d (trimmed, defaulted,
//! case-folded) without ever failing, then
//! [`resolve`](NormalizedRequest::resolve)d into a [`ResolvedRequest`] whose
//! endpoints are each exactly one [`LocationSpec`].

use domain::{LatLng, LocationSpec, TravelMode, UnitSystem, ValidationError};
use serde::{Deserialize, Serialize};

pub(crate) const MODE_MESSAGE: &str = "must be walk, drive, bicycle, or transit";
const UNITS_MESSAGE: &str = "must be metric or imperial";
const AMBIGUOUS_MESSAGE: &str = "use only one of text, place_id, or lat/lng";

/// Caller input for one endpoint
///
/// Each field is independently optional; validation requires exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Free-text address or place name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Provider place identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Coordinate pair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<LatLng>,
}

impl LocationInput {
    /// Endpoint given as free text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Endpoint given as a provider place identifier
    pub fn place_id(place_id: impl Into<String>) -> Self {
        Self {
            place_id: Some(place_id.into()),
            ..Self::default()
        }
    }

    /// Endpoint given as coordinates
    #[must_use]
    pub fn coordinate(lat: f64, lng: f64) -> Self {
        Self {
            coordinate: Some(LatLng::new(lat, lng)),
            ..Self::default()
        }
    }

    /// Build an endpoint from separately supplied parts
    ///
    /// Latitude and longitude must be given together; a half pair is rejected
    /// on `<label>_location`.
    pub fn from_parts(
        label: &str,
        text: Option<String>,
        place_id: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let coordinate = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            (None, None) => None,
            _ => {
                return Err(ValidationError::new(
                    format!("{label}_location"),
                    "lat and lng required",
                ));
            },
        };
        Ok(Self {
            text,
            place_id,
            coordinate,
        })
    }

    fn normalized(&self) -> Self {
        Self {
            text: trimmed(self.text.as_deref()),
            place_id: trimmed(self.place_id.as_deref()),
            coordinate: self.coordinate,
        }
    }
}

impl From<LocationSpec> for LocationInput {
    fn from(spec: LocationSpec) -> Self {
        match spec {
            LocationSpec::Text(text) => Self::text(text),
            LocationSpec::PlaceId(id) => Self::place_id(id),
            LocationSpec::Coordinate(location) => Self {
                coordinate: Some(location),
                ..Self::default()
            },
        }
    }
}

/// A directions query between two endpoints, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    /// Origin
    #[serde(default)]
    pub origin: LocationInput,
    /// Destination
    #[serde(default)]
    pub destination: LocationInput,
    /// Travel mode token (`walk`, `drive`, `bicycle`, `transit` or aliases)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
    /// BCP-47 language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// CLDR region code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Unit system token (`metric` or `imperial`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl DirectionsRequest {
    /// Create a request between two endpoints with default mode and units
    #[must_use]
    pub fn new(origin: LocationInput, destination: LocationInput) -> Self {
        Self {
            origin,
            destination,
            ..Self::default()
        }
    }

    /// Set the travel mode token
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the unit system token
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Trim, default, and case-fold every field
    ///
    /// Never fails: an unknown mode or unit token becomes `None` for
    /// [`NormalizedRequest::validate`] to reject.
    #[must_use]
    pub fn normalize(&self) -> NormalizedRequest {
        NormalizedRequest {
            origin: self.origin.normalized(),
            destination: self.destination.normalized(),
            mode: normalize_mode(&self.mode),
            units: match trimmed(self.units.as_deref()) {
                None => Some(UnitSystem::Metric),
                Some(units) => UnitSystem::normalize(&units),
            },
            language: trimmed(self.language.as_deref()),
            region: trimmed(self.region.as_deref()),
        }
    }

    /// Normalize and resolve in one step
    pub fn resolve(&self) -> Result<ResolvedRequest, ValidationError> {
        self.normalize().resolve()
    }
}

/// A request after [`DirectionsRequest::normalize`]
///
/// `mode` and `units` are `None` when the caller's token was not recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    /// Origin, with blank fields removed
    pub origin: LocationInput,
    /// Destination, with blank fields removed
    pub destination: LocationInput,
    /// Canonical mode, `None` if invalid
    pub mode: Option<TravelMode>,
    /// Canonical unit system, `None` if invalid
    pub units: Option<UnitSystem>,
    /// Trimmed language
    pub language: Option<String>,
    /// Trimmed region
    pub region: Option<String>,
}

impl NormalizedRequest {
    /// Check mode, both endpoints, and units, in that order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode.is_none() {
            return Err(ValidationError::new("mode", MODE_MESSAGE));
        }
        validate_location("from", &self.origin)?;
        validate_location("to", &self.destination)?;
        if self.units.is_none() {
            return Err(ValidationError::new("units", UNITS_MESSAGE));
        }
        Ok(())
    }

    /// Validate and turn each endpoint into its single [`LocationSpec`]
    pub fn resolve(self) -> Result<ResolvedRequest, ValidationError> {
        self.validate()?;
        let origin = resolve_location("from", &self.origin)?;
        let destination = resolve_location("to", &self.destination)?;
        let mode = self
            .mode
            .ok_or_else(|| ValidationError::new("mode", MODE_MESSAGE))?;
        let units = self
            .units
            .ok_or_else(|| ValidationError::new("units", UNITS_MESSAGE))?;

        Ok(ResolvedRequest {
            origin,
            destination,
            mode,
            units,
            language: self.language,
            region: self.region,
        })
    }
}

/// A fully validated request, ready to be turned into a provider query
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// Origin
    pub origin: LocationSpec,
    /// Destination
    pub destination: LocationSpec,
    /// Travel mode
    pub mode: TravelMode,
    /// Unit system
    pub units: UnitSystem,
    /// Language, if given
    pub language: Option<String>,
    /// Region, if given
    pub region: Option<String>,
}

impl ResolvedRequest {
    /// Provider query parameters, excluding the API key
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("origin", self.origin.to_wire()),
            ("destination", self.destination.to_wire()),
            ("mode", self.mode.as_str().to_string()),
        ];
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        if let Some(region) = &self.region {
            pairs.push(("region", region.clone()));
        }
        pairs.push(("units", self.units.as_str().to_string()));
        pairs
    }
}

/// Map a mode token to its canonical form; blank means walking
#[must_use]
pub fn normalize_mode(mode: &str) -> Option<TravelMode> {
    if mode.trim().is_empty() {
        return Some(TravelMode::default());
    }
    TravelMode::normalize(mode)
}

/// Check that exactly one form is present and coordinates are in range
pub fn validate_location(label: &str, input: &LocationInput) -> Result<(), ValidationError> {
    let provided = [
        input.text.as_deref().is_some_and(|t| !t.trim().is_empty()),
        input.place_id.as_deref().is_some_and(|p| !p.trim().is_empty()),
        input.coordinate.is_some(),
    ]
    .into_iter()
    .filter(|set| *set)
    .count();

    match provided {
        0 => return Err(ValidationError::required(label)),
        1 => {},
        _ => return Err(ValidationError::new(label, AMBIGUOUS_MESSAGE)),
    }

    if let Some(location) = input.coordinate {
        location.check_range().map_err(|err| {
            ValidationError::new(
                format!("{label}.{}", err.field_suffix()),
                err.range_message(),
            )
        })?;
    }
    Ok(())
}

/// Validate an endpoint and return its single resolved form
pub fn resolve_location(label: &str, input: &LocationInput) -> Result<LocationSpec, ValidationError> {
    validate_location(label, input)?;

    if let Some(place_id) = trimmed(input.place_id.as_deref()) {
        return Ok(LocationSpec::PlaceId(place_id));
    }
    if let Some(location) = input.coordinate {
        return Ok(LocationSpec::Coordinate(location));
    }
    trimmed(input.text.as_deref())
        .map(LocationSpec::Text)
        .ok_or_else(|| ValidationError::required(label))
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
