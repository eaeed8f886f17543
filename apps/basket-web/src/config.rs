//! Web server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use basket_report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::env;

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Address to bind (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port (default: 8080)
    pub http_port: u16,

    /// Title printed at the top of the PDF report
    pub report_title: String,

    /// Subtitle printed under the title
    pub report_subtitle: String,

    /// Footer printed on every report page
    pub report_footer: String,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ReportOptions::default();

        let config = WebConfig {
            bind_addr: lookup("BASKET_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),

            http_port: lookup("BASKET_HTTP_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BASKET_HTTP_PORT".to_string()))?,

            report_title: lookup("BASKET_REPORT_TITLE").unwrap_or(defaults.title),

            report_subtitle: lookup("BASKET_REPORT_SUBTITLE").unwrap_or(defaults.subtitle),

            report_footer: lookup("BASKET_REPORT_FOOTER").unwrap_or(defaults.footer),
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BASKET_BIND_ADDR".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    /// Report texts derived from this configuration.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report_title.clone(),
            subtitle: self.report_subtitle.clone(),
            footer: self.report_footer.clone(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
