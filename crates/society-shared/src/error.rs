//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Unable to connect to server. Please restart the application.")]
    BackendUnreachable,

    #[error("Internal error: {0}")]
    InternalError(String),
}
