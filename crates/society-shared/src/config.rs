//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::constants;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendSettings,
    pub startup: StartupSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    pub theme: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StartupSettings {
    pub warmup_secs: u64,
    pub max_retries: u32,
    pub backoff_base_secs: u64,
}

impl StartupSettings {
    pub fn warmup(&self) -> Duration {
        Duration::from_secs(self.warmup_secs)
    }

    /// Linear backoff: 2s, 4s, 6s for the default base.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.backoff_base_secs * (attempt as u64 + 1))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "society-manager")?
            .set_default("app.theme", "light")?
            .set_default("backend.base_url", "http://127.0.0.1:8000/api")?
            .set_default("backend.timeout_secs", 30)?
            .set_default("startup.warmup_secs", constants::STARTUP_WARMUP_SECS)?
            .set_default("startup.max_retries", constants::STARTUP_MAX_RETRIES)?
            .set_default(
                "startup.backoff_base_secs",
                constants::STARTUP_BACKOFF_BASE_SECS,
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
