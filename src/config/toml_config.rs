use crate::config::DashboardConfig;
use crate::domain::ports::PayloadShape;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::Validate;
use crate::view::{OutputFormat, Route};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub host: Option<String>,
    pub payload: Option<PayloadShape>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    pub route: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JACS_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn route(&self) -> Result<Option<Route>> {
        self.view.route.as_deref().map(str::parse::<Route>).transpose()
    }

    /// Settings from the file alone, defaults for anything missing.
    pub fn into_settings(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();
        let route = self.route()?.unwrap_or(defaults.route);

        Ok(DashboardConfig {
            host: self.source.host.unwrap_or(defaults.host),
            payload: self.source.payload.unwrap_or(defaults.payload),
            timeout_seconds: self.source.timeout_seconds,
            route,
            format: self.view.format.unwrap_or(defaults.format),
            output_path: self.export.map(|e| e.output_path),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
host = "jacs-dev:9000"
payload = "listing"
timeout_seconds = 15

[view]
route = "/"
format = "csv"

[export]
output_path = "./exports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.host, "jacs-dev:9000");
        assert_eq!(settings.payload, PayloadShape::Listing);
        assert_eq!(settings.timeout_seconds, Some(15));
        assert_eq!(settings.route, Route::Home);
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.output_path.as_deref(), Some("./exports"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().into_settings().unwrap();
        assert_eq!(settings, DashboardConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("JACS_DASHBOARD_TEST_HOST", "jacs-prod:8880");
        let config = TomlConfig::from_toml_str(
            r#"
[source]
host = "${JACS_DASHBOARD_TEST_HOST}"
"#,
        )
        .unwrap();
        assert_eq!(config.source.host.as_deref(), Some("jacs-prod:8880"));

        let config = TomlConfig::from_toml_str(
            r#"
[source]
host = "${JACS_DASHBOARD_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.source.host.as_deref(),
            Some("${JACS_DASHBOARD_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(TomlConfig::from_toml_str("[source]\npayload = \"xml\"\n").is_err());

        let config = TomlConfig::from_toml_str("[view]\nroute = \"/admin\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nhost = \"localhost:9999\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.source.host.as_deref(), Some("localhost:9999"));

        assert!(TomlConfig::from_file("/nonexistent/dashboard.toml").is_err());
    }
}
