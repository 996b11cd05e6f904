use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATASET: &str = "data/warehouses.json";
pub const DEFAULT_PING_MESSAGE: &str = "ping";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Result count when a request does not name a limit.
pub const DEFAULT_LIMIT: usize = 12;

/// Result count of the "smart" flow, see [`crate::types::Preferences::smart_defaults`].
pub const SMART_DEFAULT_LIMIT: usize = 6;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dataset: PathBuf,
    pub ping_message: String,
    pub default_limit: usize,
    pub log_level: String,
}

impl ServerConfig {
    pub fn v0() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            dataset: PathBuf::from(DEFAULT_DATASET),
            ping_message: DEFAULT_PING_MESSAGE.into(),
            default_limit: DEFAULT_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
