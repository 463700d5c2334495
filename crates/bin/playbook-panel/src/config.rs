//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `playbook-panel.toml` in the working directory. Every field has
//! a sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use playbooks_app::panel::PanelOptions;
use playbooks_app::ports::PROFILE_CHUNK_SIZE;

/// Longest accepted debounce window.
const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the initial playbook comes from.
    pub seed: SeedConfig,
    /// Panel behaviour.
    pub panel: PanelConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Seed file location. Without one, a built-in demo playbook is used.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Message catalog for a locale. Defaults are English.
    pub locale_catalog: Option<PathBuf>,
    /// Delay before channel-settings edits are committed, in milliseconds.
    pub debounce_ms: u64,
    /// Page size for the user pickers.
    pub profile_chunk_size: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `playbook-panel.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("playbook-panel.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("PLAYBOOK_PANEL_SEED") {
            self.seed.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("PLAYBOOK_PANEL_LOCALE") {
            self.panel.locale_catalog = Some(PathBuf::from(val));
        }
        if let Some(val) = var("PLAYBOOK_PANEL_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.panel.debounce_ms = ms;
            }
        }
        if let Some(val) = var("PLAYBOOK_PANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.panel.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Validation(format!(
                "debounce_ms must be at most {MAX_DEBOUNCE_MS}"
            )));
        }
        if self.panel.profile_chunk_size == 0 {
            return Err(ConfigError::Validation(
                "profile_chunk_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Panel options derived from the `[panel]` table.
    #[must_use]
    pub fn panel_options(&self) -> PanelOptions {
        PanelOptions {
            debounce: Duration::from_millis(self.panel.debounce_ms),
            profile_chunk_size: self.panel.profile_chunk_size,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            locale_catalog: None,
            debounce_ms: 500,
            profile_chunk_size: PROFILE_CHUNK_SIZE,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "playbook_panel=info,playbooks_app=info,playbooks_adapter_memory=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert!(config.seed.path.is_none());
        assert!(config.panel.locale_catalog.is_none());
        assert_eq!(config.panel.debounce_ms, 500);
        assert_eq!(config.panel.profile_chunk_size, 200);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.panel.debounce_ms, 500);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [seed]
            path = 'seed.toml'

            [panel]
            locale_catalog = 'fr.toml'
            debounce_ms = 250
            profile_chunk_size = 50

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.seed.path, Some(PathBuf::from("seed.toml")));
        assert_eq!(config.panel.locale_catalog, Some(PathBuf::from("fr.toml")));
        assert_eq!(config.panel.debounce_ms, 250);
        assert_eq!(config.panel.profile_chunk_size, 50);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.panel.debounce_ms, 500);
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("PLAYBOOK_PANEL_SEED", "/tmp/seed.toml"),
            ("PLAYBOOK_PANEL_LOCALE", "/tmp/fr.toml"),
            ("PLAYBOOK_PANEL_DEBOUNCE_MS", "100"),
            ("PLAYBOOK_PANEL_LOG", "trace"),
        ]));
        assert_eq!(config.seed.path, Some(PathBuf::from("/tmp/seed.toml")));
        assert_eq!(config.panel.locale_catalog, Some(PathBuf::from("/tmp/fr.toml")));
        assert_eq!(config.panel.debounce_ms, 100);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_rust_log_over_panel_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PLAYBOOK_PANEL_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_debounce_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PLAYBOOK_PANEL_DEBOUNCE_MS", "soon")]));
        assert_eq!(config.panel.debounce_ms, 500);
    }

    #[test]
    fn should_reject_excessive_debounce() {
        let mut config = Config::default();
        config.panel.debounce_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_chunk_size() {
        let mut config = Config::default();
        config.panel.profile_chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_convert_to_panel_options() {
        let mut config = Config::default();
        config.panel.debounce_ms = 40;
        let options = config.panel_options();
        assert_eq!(options.debounce, Duration::from_millis(40));
        assert_eq!(options.profile_chunk_size, 200);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
