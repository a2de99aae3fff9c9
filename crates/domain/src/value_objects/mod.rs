//! Value Objects - Immutable, identity-less domain primitives

mod lat_lng;
mod location_spec;
mod travel_mode;
mod unit_system;

pub use lat_lng::{CoordinateError, LatLng};
pub use location_spec::LocationSpec;
pub use travel_mode::TravelMode;
pub use unit_system::UnitSystem;
