#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::adapters::http::metadata_url;
use crate::domain::ports::{ConfigProvider, PayloadShape};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use crate::view::{OutputFormat, Route};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost:8080";

/// Resolved settings, after the config file and CLI flags are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub host: String,
    pub payload: PayloadShape,
    pub timeout_seconds: Option<u64>,
    pub route: Route,
    pub format: OutputFormat,
    pub output_path: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            payload: PayloadShape::Auto,
            timeout_seconds: None,
            route: Route::Services,
            format: OutputFormat::Table,
            output_path: None,
        }
    }
}

impl ConfigProvider for DashboardConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn payload_shape(&self) -> PayloadShape {
        self.payload
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn route(&self) -> Route {
        self.route
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        if self.host.contains("://") {
            validation::validate_url("host", &self.host)?;
        }
        validation::validate_url("host", &metadata_url(&self.host))?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        Ok(())
    }
}
