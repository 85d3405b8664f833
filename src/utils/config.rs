//! Runtime settings read from the environment at startup.
//!
//! Physics tunables are compile-time constants; only where files go and
//! whether telemetry is written can change between runs.

use super::persistence::default_data_dir;
use crate::core::constants::{LOG_FILE, RESULTS_FILE, TELEMETRY_FILE};
use std::env;
use std::io;
use std::path::PathBuf;

pub const HOME_ENV: &str = "LUNAR_DESCENT_HOME";
pub const TELEMETRY_ENV: &str = "LUNAR_DESCENT_TELEMETRY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub telemetry_enabled: bool,
}

impl Settings {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let data_dir = match lookup(HOME_ENV).filter(|value| !value.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let telemetry_enabled = lookup(TELEMETRY_ENV)
            .map(|value| parse_bool(&value).unwrap_or(true))
            .unwrap_or(true);

        Ok(Self {
            data_dir,
            telemetry_enabled,
        })
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(RESULTS_FILE)
    }

    pub fn telemetry_path(&self) -> PathBuf {
        self.data_dir.join(TELEMETRY_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
