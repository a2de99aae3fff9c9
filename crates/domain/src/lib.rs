//! Domain layer for the directions client
//!
//! Contains the value objects shared by every directions integration:
//! coordinates, travel modes, unit systems, the resolved location forms, and
//! the field-scoped validation error. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::ValidationError;
pub use value_objects::*;
