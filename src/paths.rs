//! Centralized path definitions for cardcheck
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.cardcheck/
//! └── config.toml               # Output preferences
//! ```
//!
//! cardcheck keeps no per-project state and never writes card numbers to disk.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".cardcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global cardcheck directory.
///
/// Returns `~/.cardcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.cardcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
