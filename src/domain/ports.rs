use crate::domain::model::ServiceRecord;
use crate::utils::error::Result;
use crate::view::{OutputFormat, Route};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ServiceSource: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<ServiceRecord>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn payload_shape(&self) -> PayloadShape;
    fn request_timeout(&self) -> Option<Duration>;
    fn output_path(&self) -> Option<&str>;
    fn route(&self) -> Route;
    fn format(&self) -> OutputFormat;
}

/// Body layouts the metadata endpoint has been seen to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PayloadShape {
    #[default]
    Auto,
    /// `[{...}, {...}]`
    Flat,
    /// `{"data": {"children": [{"data": {...}}]}}`
    Listing,
}
