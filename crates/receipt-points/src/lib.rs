//! Receipt intake, validation, and points scoring.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
