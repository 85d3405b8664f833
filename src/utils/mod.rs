//! Utility modules: runtime settings, data directory, logging.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::Settings;
