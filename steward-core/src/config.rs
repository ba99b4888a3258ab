//! Configuration management.
//!
//! Configuration is sourced from the process environment exactly once, by
//! the outer bootstrap, and handed to components by value. Components never
//! read environment variables themselves.

use crate::error::{Result, StewardError};
use crate::paths;
use std::path::PathBuf;

/// Runtime configuration for a reconciliation pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the manifest API (`APP_API_ROOT`).
    pub api_root: String,
    /// Scratch directory manifest documents are written into.
    pub manifest_dir: PathBuf,
    /// Explicit docker binary override, if any (`STEWARD_DOCKER_BIN`).
    pub docker_bin: Option<PathBuf>,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// A missing `APP_API_ROOT` is a startup-time configuration error, not
    /// a runtime fault.
    pub fn from_env() -> Result<Self> {
        let api_root = std::env::var("APP_API_ROOT").map_err(|_| StewardError::InvalidConfig {
            reason: "APP_API_ROOT is not set".to_string(),
        })?;

        if api_root.is_empty() {
            return Err(StewardError::InvalidConfig {
                reason: "APP_API_ROOT is empty".to_string(),
            });
        }

        let docker_bin = std::env::var("STEWARD_DOCKER_BIN").ok().map(PathBuf::from);

        Ok(Self { api_root, manifest_dir: paths::manifest_dir(), docker_bin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the APP_API_ROOT mutations never race across threads.
    #[test]
    fn test_from_env() {
        std::env::remove_var("APP_API_ROOT");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, StewardError::InvalidConfig { .. }));

        std::env::set_var("APP_API_ROOT", "http://localhost:3000");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_root, "http://localhost:3000");
        std::env::remove_var("APP_API_ROOT");
    }
}
