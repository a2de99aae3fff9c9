//! Directions integration
//!
//! Talks to a mapping provider's legacy Directions HTTP API. Caller intent is
//! normalized into exactly one location form per endpoint, turned into a
//! provider query, executed, and mapped from the provider's nested JSON into
//! a flat [`DirectionsResponse`].
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the interface and [`HttpDirectionsClient`]
//! implements it over HTTP. [`compare_modes`] runs the same request for a
//! second travel mode on top of any [`DirectionsClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_directions::{
//!     DirectionsClient, DirectionsConfig, DirectionsRequest, HttpDirectionsClient, LocationInput,
//! };
//!
//! let client = HttpDirectionsClient::new(DirectionsConfig::load()?)?;
//!
//! let request = DirectionsRequest::new(
//!     LocationInput::text("Brandenburger Tor, Berlin"),
//!     LocationInput::coordinate(52.5219, 13.4132),
//! )
//! .with_mode("bike");
//!
//! let response = client.directions(request).await?;
//! for step in &response.steps {
//!     println!("{} ({})", step.instruction, step.distance_text);
//! }
//! ```

mod client;
mod compare;
mod config;
mod error;
mod models;
mod query;
mod request;
mod sanitize;

pub use client::{DirectionsClient, HttpDirectionsClient, with_deadline};
pub use compare::compare_modes;
pub use config::{DEFAULT_DIRECTIONS_BASE_URL, DirectionsConfig};
pub use domain::{LatLng, LocationSpec, TravelMode, UnitSystem, ValidationError};
pub use error::{DirectionsError, ErrorKind};
pub use models::{DirectionsResponse, DirectionsStep, ModeComparison, map_response};
pub use query::build_directions_url;
pub use request::{
    DirectionsRequest, LocationInput, NormalizedRequest, ResolvedRequest, normalize_mode,
    resolve_location, validate_location,
};
pub use sanitize::clean_instruction;
