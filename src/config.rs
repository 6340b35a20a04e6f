use std::env;
use std::path::PathBuf;

use crate::adapters::store::memory::DEFAULT_MAX_LOGS;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_logs: usize,
    pub data_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("FIREWATCH_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            max_logs: env::var("FIREWATCH_MAX_LOGS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_LOGS),
            data_file: env::var("FIREWATCH_DATA_FILE").ok().map(PathBuf::from),
            log_level: env::var("FIREWATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
