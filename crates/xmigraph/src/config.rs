//! Configuration types for xmigraph reports.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ReportConfig`] - Controls what the report contains and its format.
//! - [`ReportFormat`] - Plain-text summary or JSON.
//!
//! # Example
//!
//! ```
//! # use xmigraph::config::{AppConfig, ReportFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.report().format(), ReportFormat::Summary);
//! assert!(config.report().include_operations());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given report configuration.
    pub fn new(report: ReportConfig) -> Self {
        Self { report }
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human readable plain text.
    #[default]
    Summary,
    /// Machine readable JSON.
    Json,
}

/// What a report contains and how it is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    format: ReportFormat,
    include_operations: bool,
    include_wiring: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            include_operations: true,
            include_wiring: true,
        }
    }
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - Output format.
    /// * `include_operations` - List interface operations.
    /// * `include_wiring` - List component-to-component wiring.
    pub fn new(format: ReportFormat, include_operations: bool, include_wiring: bool) -> Self {
        Self {
            format,
            include_operations,
            include_wiring,
        }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn include_operations(&self) -> bool {
        self.include_operations
    }

    pub fn include_wiring(&self) -> bool {
        self.include_wiring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.report().format(), ReportFormat::Summary);
        assert!(config.report().include_operations());
        assert!(config.report().include_wiring());
    }

    #[test]
    fn test_partial_report_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [report]
            format = "json"
            include_wiring = false
            "#,
        )
        .unwrap();

        assert_eq!(config.report().format(), ReportFormat::Json);
        assert!(config.report().include_operations());
        assert!(!config.report().include_wiring());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[report]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }
}
