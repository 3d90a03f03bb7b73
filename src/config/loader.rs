//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, HourPolicy, ShiftWindow};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Working day starts at {}", loader.shift_window().day_start());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, for callers that don't use a
    /// config file.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured shift window.
    pub fn shift_window(&self) -> &ShiftWindow {
        self.config.shift()
    }

    /// Returns the configured hour policy.
    pub fn hour_policy(&self) -> HourPolicy {
        self.config.hour_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// CL-001: missing file reports ConfigNotFound
    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load("/definitely/not/here/engine.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    /// CL-002: malformed YAML reports ConfigParseError
    #[test]
    fn test_malformed_yaml() {
        let path = std::env::temp_dir().join("timesheet_engine_bad_config.yaml");
        fs::write(&path, "shift: [not, a, mapping]").unwrap();

        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_file(&path).ok();
    }

    /// CL-003: the repo's shipped config loads with default semantics
    #[test]
    fn test_shipped_config_loads() {
        let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
        assert_eq!(loader.shift_window(), &ShiftWindow::default());
        assert_eq!(loader.hour_policy(), HourPolicy::ClampToShift);
    }

    #[test]
    fn test_from_config_round_trip() {
        let loader = ConfigLoader::from_config(EngineConfig::default());
        assert_eq!(loader.config(), &EngineConfig::default());
    }
}
