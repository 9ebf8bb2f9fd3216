//! Application layer
//!
//! Orchestrates use cases and coordinates domain objects.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::PhoneCountryService;
