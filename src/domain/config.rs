//! Configuration types for the exporter.
//!
//! Mirrors the on-disk TOML layout: an `[output]` table for where records
//! land and an `[export]` table for how they are serialized.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where exported files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

/// How records are serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Pretty-print the JSON document.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Worksheet name for the spreadsheet output.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Render the spreadsheet header row in bold.
    #[serde(default = "default_bold_header")]
    pub bold_header: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
            sheet_name: default_sheet_name(),
            bold_header: default_bold_header(),
        }
    }
}

const fn default_pretty_json() -> bool {
    true
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

const fn default_bold_header() -> bool {
    true
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Output location configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Serialization configuration.
    #[serde(default)]
    pub export: ExportSettings,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".issue-exporter")
    }

    /// Get the config file path.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output.dir, PathBuf::from("data"));
        assert!(config.export.pretty_json);
        assert_eq!(config.export.sheet_name, "Sheet1");
        assert!(config.export.bold_header);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[output]\ndir = \"out\"\n").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert!(config.export.pretty_json);
    }
}
