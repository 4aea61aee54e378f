//! Player configuration.
//!
//! [`PlayerConfig`] can be built in code through [`PlayerConfigBuilder`] or
//! loaded from a YAML or JSON file. Unknown keys are rejected so typos do not
//! silently fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_PENDING;
use crate::engine::FinishedAction;
use crate::error::{ConfigError, ConfigResult};

/// What happens to the engine once a pattern has played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopPolicy {
    /// Stop the engine after every pattern. The next play pays a restart.
    #[default]
    AutoStop,
    /// Leave the engine running between patterns.
    KeepWarm,
}

impl StopPolicy {
    /// The action returned to the engine when its players finish.
    #[must_use]
    pub fn finished_action(self) -> FinishedAction {
        match self {
            StopPolicy::AutoStop => FinishedAction::StopEngine,
            StopPolicy::KeepWarm => FinishedAction::LeaveRunning,
        }
    }
}

/// Configuration for a [`HapticPlayer`](crate::HapticPlayer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Master switch. A disabled player is never constructed.
    pub enabled: bool,
    /// Engine behaviour between patterns.
    pub stop_policy: StopPolicy,
    /// Play requests allowed to wait for the worker before new ones are dropped.
    pub max_pending: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stop_policy: StopPolicy::AutoStop,
            max_pending: DEFAULT_MAX_PENDING,
        }
    }
}

impl PlayerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_pending` is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_pending == 0 {
            return Err(ConfigError::invalid("max_pending must be greater than 0"));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::default()
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML, unknown keys or invalid values.
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, unknown keys or invalid values.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension or does not contain a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&read()?),
            "json" => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat(extension)),
        }
    }
}

/// Builder for `PlayerConfig`.
#[derive(Debug, Default)]
pub struct PlayerConfigBuilder {
    config: PlayerConfig,
}

impl PlayerConfigBuilder {
    /// Enable or disable haptics.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Set the stop policy.
    #[must_use]
    pub fn stop_policy(mut self, policy: StopPolicy) -> Self {
        self.config.stop_policy = policy;
        self
    }

    /// Set the pending request bound.
    #[must_use]
    pub fn max_pending(mut self, max_pending: usize) -> Self {
        self.config.max_pending = max_pending;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> ConfigResult<PlayerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert!(config.enabled);
        assert_eq!(config.stop_policy, StopPolicy::AutoStop);
        assert_eq!(config.max_pending, DEFAULT_MAX_PENDING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stop_policy_action() {
        assert_eq!(
            StopPolicy::AutoStop.finished_action(),
            FinishedAction::StopEngine
        );
        assert_eq!(
            StopPolicy::KeepWarm.finished_action(),
            FinishedAction::LeaveRunning
        );
    }

    #[test]
    fn test_builder_rejects_zero_pending() {
        let result = PlayerConfig::builder().max_pending(0).build();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_yaml_partial_document() -> ConfigResult<()> {
        let config = PlayerConfig::from_yaml_str("stop_policy: keep-warm\n")?;
        assert_eq!(config.stop_policy, StopPolicy::KeepWarm);
        assert!(config.enabled);
        assert_eq!(config.max_pending, DEFAULT_MAX_PENDING);
        Ok(())
    }

    #[test]
    fn test_json_unknown_key_rejected() {
        let result = PlayerConfig::from_json_str(r#"{"stop_policy":"auto-stop","volume":3}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = PlayerConfig::load("haptics.toml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PlayerConfig::load("/nonexistent/haptics.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
