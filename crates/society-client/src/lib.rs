//! # Society Client
//!
//! REST-backed repository implementations and the startup bootstrap for
//! the society management backend.

pub mod bootstrap;
pub mod rest;

pub use bootstrap::{load_snapshot, load_snapshot_with_retry, RestBackend, RetryPolicy, Snapshot};
pub use rest::client::{RestClient, RestError};
