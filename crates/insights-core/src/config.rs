//! Configuration management for the campaign insights dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Refresh controller timing
    #[serde(default)]
    #[validate(nested)]
    pub refresh: RefreshConfig,

    /// Table view-model settings
    #[serde(default)]
    #[validate(nested)]
    pub table: TableConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Refresh controller timing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshConfig {
    /// Simulated latency of the initial load
    #[serde(default = "default_initial_load_delay_ms")]
    #[validate(range(max = 600_000))]
    pub initial_load_delay_ms: u64,

    /// Simulated latency of a manual refresh
    #[serde(default = "default_refresh_delay_ms")]
    #[validate(range(max = 600_000))]
    pub refresh_delay_ms: u64,

    /// Background refresh period
    #[serde(default = "default_auto_refresh_interval_secs")]
    #[validate(range(min = 1, max = 86_400))]
    pub auto_refresh_interval_secs: u64,

    /// Whether the background timer is armed at all
    #[serde(default = "default_auto_refresh_enabled")]
    pub auto_refresh_enabled: bool,
}

/// Table view-model settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub page_size: usize,

    /// Number of leading page buttons before the gap marker
    #[serde(default = "default_page_window")]
    #[validate(range(min = 1, max = 50))]
    pub page_window: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
const fn default_initial_load_delay_ms() -> u64 {
    2000
}

const fn default_refresh_delay_ms() -> u64 {
    1000
}

const fn default_auto_refresh_interval_secs() -> u64 {
    30
}

const fn default_auto_refresh_enabled() -> bool {
    true
}

const fn default_page_size() -> usize {
    15
}

const fn default_page_window() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            initial_load_delay_ms: default_initial_load_delay_ms(),
            refresh_delay_ms: default_refresh_delay_ms(),
            auto_refresh_interval_secs: default_auto_refresh_interval_secs(),
            auto_refresh_enabled: default_auto_refresh_enabled(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_window: default_page_window(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl RefreshConfig {
    /// Initial load latency
    #[must_use]
    pub const fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_delay_ms)
    }

    /// Manual refresh latency
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Background refresh period
    #[must_use]
    pub const fn auto_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.auto_refresh_interval_secs)
    }
}

impl Config {
    /// Load configuration from an optional `insights`/`config` file and the
    /// environment, e.g. `INSIGHTS_TABLE__PAGE_SIZE=20`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("insights").required(false))
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("INSIGHTS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validated()
    }

    /// Load configuration from an explicit TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    fn validated(self) -> crate::Result<Self> {
        self.validate().map_err(|errors| {
            crate::Error::validation("config", errors.to_string())
        })?;
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.refresh.initial_load_delay_ms, 2000);
        assert_eq!(config.refresh.refresh_delay_ms, 1000);
        assert_eq!(config.refresh.auto_refresh_interval_secs, 30);
        assert!(config.refresh.auto_refresh_enabled);

        assert_eq!(config.table.page_size, 15);
        assert_eq!(config.table.page_window, 5);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duration_accessors() {
        let config = RefreshConfig::default();

        assert_eq!(config.initial_load_delay(), Duration::from_secs(2));
        assert_eq!(config.refresh_delay(), Duration::from_secs(1));
        assert_eq!(config.auto_refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [refresh]
            refresh_delay_ms = 250

            [table]
            page_size = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh.refresh_delay_ms, 250);
        assert_eq!(config.refresh.initial_load_delay_ms, 2000);
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.page_window, 5);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.table.page_size, 15);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = Config::from_toml_str("[table]\npage_size = 0\n");

        match result {
            Err(crate::Error::Validation { field, message }) => {
                assert_eq!(field, "config");
                assert!(message.contains("page_size"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let result = Config::from_toml_str("[refresh]\nauto_refresh_interval_secs = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        let result = Config::from_toml_str("[table\npage_size = 3");
        assert!(matches!(result, Err(crate::Error::Configuration { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"pretty\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join("missing.toml"));

        match result {
            Err(crate::Error::Configuration { message }) => {
                assert!(message.contains("Failed to read config file"));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.table.page_size, config.table.page_size);
        assert_eq!(
            deserialized.refresh.auto_refresh_interval_secs,
            config.refresh.auto_refresh_interval_secs
        );
    }
}
