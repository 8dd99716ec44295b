use crate::adapters::payload::decode_services;
use crate::domain::model::ServiceRecord;
use crate::domain::ports::{ConfigProvider, PayloadShape, ServiceSource};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const METADATA_PATH: &str = "/jacs/jacs-api/v2/services/metadata";

/// Builds the metadata URL for a host such as `jacs-dev:9000`.
///
/// A bare host gets `http://`; an explicit scheme is kept.
pub fn metadata_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}{}", host, METADATA_PATH)
    } else {
        format!("http://{}{}", host, METADATA_PATH)
    }
}

#[derive(Debug, Clone)]
pub struct HttpServiceSource {
    client: Client,
    url: String,
    shape: PayloadShape,
}

impl HttpServiceSource {
    pub fn new(host: &str, shape: PayloadShape, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: metadata_url(host),
            shape,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.host(),
            config.payload_shape(),
            config.request_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ServiceSource for HttpServiceSource {
    async fn fetch_services(&self) -> Result<Vec<ServiceRecord>> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(DashboardError::HttpStatusError {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let services = decode_services(body, self.shape)?;

        tracing::debug!("Decoded {} services", services.len());
        Ok(services)
    }
}
