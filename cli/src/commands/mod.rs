//! CLI Commands

pub mod config;
pub mod flag;
pub mod phone;
