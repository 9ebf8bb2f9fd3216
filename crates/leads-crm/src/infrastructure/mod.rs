//! Infrastructure layer
//!
//! Concrete adapters for the outbound ports.

pub mod phone_parser;
pub mod region_names;

pub use phone_parser::LibPhoneNumberParser;
pub use region_names::StaticRegionNames;
