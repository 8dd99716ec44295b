use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Unexpected payload: {message}")]
    PayloadError { message: String },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown route: {path}")]
    RouteError { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

impl DashboardError {
    pub fn payload(message: impl Into<String>) -> Self {
        Self::PayloadError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::PayloadError { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::RouteError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_connect() => {
                "Could not reach the services endpoint. Check --host.".to_string()
            }
            Self::ApiError(e) if e.is_timeout() => {
                "The services endpoint did not answer in time.".to_string()
            }
            Self::ApiError(e) if e.is_decode() => {
                "The services endpoint did not return JSON.".to_string()
            }
            Self::HttpStatusError { status, .. } => {
                format!("The services endpoint answered with HTTP {status}.")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
