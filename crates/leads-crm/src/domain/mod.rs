//! Domain module
//!
//! Phone country resolution logic, free of parsing and locale concerns.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
