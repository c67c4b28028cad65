//! # Society Shared
//!
//! Shared configuration, telemetry, and the application event bus.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::*;
