//! Domain module
//!
//! Clients, contracts and the validated primitives they are built from.

pub mod aggregates;
pub mod value_objects;

pub use aggregates::*;
pub use value_objects::*;
