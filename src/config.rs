//! Configuration for the `kb-format` CLI
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (polyglot.toml)
//! - Environment variables (POLYGLOT__*)
//!
//! ## Example config file (polyglot.toml):
//! ```toml
//! [logging]
//! filter = "polyglot_schemas=debug"
//!
//! [output]
//! format = "json"
//!
//! [demo]
//! keep_files = false
//! dir = "/tmp/polyglot-demo"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KbConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive, used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

/// Report output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

/// How detection results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Demo walkthrough configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Keep the scratch file instead of removing it on exit
    #[serde(default)]
    pub keep_files: bool,

    /// Directory for the scratch file (system temp dir when unset)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl KbConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering a specific file over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["polyglot.toml", ".polyglot.toml", "config/polyglot.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "polyglot", "kb-format") {
            let xdg_config = config_dir.config_dir().join("polyglot.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("POLYGLOT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Directory for demo scratch files
    pub fn demo_dir(&self) -> PathBuf {
        self.demo.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KbConfig::default();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.output.format, ReportFormat::Text);
        assert!(!config.demo.keep_files);
    }

    #[test]
    fn test_serialize_config() {
        let config = KbConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n\n[demo]\nkeep_files = true\n").unwrap();

        let config = KbConfig::load_from(path.to_str()).unwrap();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.demo.keep_files);
        assert_eq!(config.logging.filter, "info");
    }
}
