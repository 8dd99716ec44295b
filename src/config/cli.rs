use crate::config::{DashboardConfig, TomlConfig};
use crate::domain::ports::PayloadShape;
use crate::utils::error::Result;
use crate::view::{OutputFormat, Route};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "jacs-dashboard")]
#[command(about = "Terminal dashboard for the JACS services metadata API")]
pub struct CliConfig {
    #[arg(long, help = "JACS host, e.g. localhost:8080 [default: localhost:8080]")]
    pub host: Option<String>,

    #[arg(long, help = "View to show: / or /services [default: /services]")]
    pub route: Option<Route>,

    #[arg(long, value_enum, help = "Output format [default: table]")]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum, help = "Response body layout [default: auto]")]
    pub payload: Option<PayloadShape>,

    #[arg(long, help = "Request timeout in seconds (none by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Also write the output to <DIR>/services.<ext>")]
    pub output_path: Option<String>,

    #[arg(long, help = "TOML config file; flags override its values")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Refresh every N seconds until Ctrl-C")]
    pub watch_seconds: Option<u64>,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads `--config` if given and applies the flags on top of it.
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge_file(file.into_settings()?))
    }

    pub fn merge_file(&self, base: DashboardConfig) -> DashboardConfig {
        DashboardConfig {
            host: self.host.clone().unwrap_or(base.host),
            payload: self.payload.unwrap_or(base.payload),
            timeout_seconds: self.timeout_seconds.or(base.timeout_seconds),
            route: self.route.unwrap_or(base.route),
            format: self.format.unwrap_or(base.format),
            output_path: self.output_path.clone().or(base.output_path),
        }
    }
}
