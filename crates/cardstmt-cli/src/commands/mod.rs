//! CLI sub-commands.

pub mod batch;
pub mod config;
pub mod issuers;
pub mod output;
pub mod process;

use std::path::{Path, PathBuf};

use cardstmt_core::StatementConfig;
use tracing::debug;

/// Resolve the configuration file: an explicit path, else the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(config::default_config_path)
}

/// Load configuration. An explicit path must exist; the default location is
/// optional and falls back to built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<StatementConfig> {
    if let Some(path) = explicit {
        return Ok(StatementConfig::from_file(Path::new(path))?);
    }

    let path = config::default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(StatementConfig::from_file(&path)?)
    } else {
        Ok(StatementConfig::default())
    }
}
