//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Startup load retry policy: up to 3 retries with linear backoff.
pub const STARTUP_MAX_RETRIES: u32 = 3;
pub const STARTUP_BACKOFF_BASE_SECS: u64 = 2;

/// Grace period before the first load, giving the bundled backend time to boot.
pub const STARTUP_WARMUP_SECS: u64 = 3;

pub const PLACEHOLDER_UNKNOWN_MEMBER: &str = "Unknown Member";
pub const PLACEHOLDER_NOT_AVAILABLE: &str = "N/A";
