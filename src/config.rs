//! Installer configuration.
//!
//! The only configurable value is the server the installer talks to.
//! It is read once at startup from an optional `.canopy.yml` override in
//! the project root and then threaded explicitly into whatever needs it;
//! there is no process-wide mutable state.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{CanopyError, Result};

/// Default API endpoint for version and asset queries.
pub const DEFAULT_SERVER: &str = "https://api.canopythemes.com";

/// Name of the per-project override file.
pub const CONFIG_FILE: &str = ".canopy.yml";

#[derive(Debug, Deserialize)]
struct RawConfig {
    server: Option<String>,
}

/// Resolved installer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the theme server, no trailing slash required.
    pub server_url: String,
}

impl Config {
    /// Load configuration for a project, applying the optional
    /// `.canopy.yml` override when present.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let raw: RawConfig =
            serde_yaml::from_str(&content).map_err(|e| CanopyError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            server_url: raw.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER.to_string(),
        }
    }
}
