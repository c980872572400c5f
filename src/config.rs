// In: src/config.rs

//! The single source of truth for railfence runtime configuration.
//!
//! `RailFenceConfig` is created once at the application boundary (the CLI, or
//! any other caller of the bridge) and passed down by reference. The kernels
//! never see it: they only take an explicit rail count.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::RailFenceError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Verbosity of the `env_logger` backend installed by `observability::init_logging`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

//==================================================================================
// II. The Unified RailFenceConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RailFenceConfig {
    /// Rail count used when the caller does not specify one.
    #[serde(default = "default_rails")]
    pub default_rails: usize,

    /// Where the `{cipher, rails}` record is written and read.
    #[serde(default = "default_record_path")]
    pub record_path: PathBuf,

    #[serde(default)]
    pub log_level: LogLevel,

    /// If set, log output is appended to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// If true, records carry the ciphertext length so a truncated or edited
    /// cipher is rejected on decrypt.
    #[serde(default = "default_true")]
    pub store_length: bool,
}

impl Default for RailFenceConfig {
    fn default() -> Self {
        Self {
            default_rails: default_rails(),
            record_path: default_record_path(),
            log_level: LogLevel::default(),
            log_file: None,
            store_length: true,
        }
    }
}

impl RailFenceConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RailFenceError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: RailFenceConfig = serde_json::from_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }
}

fn default_rails() -> usize {
    3
}

fn default_record_path() -> PathBuf {
    PathBuf::from("railfence.json")
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
