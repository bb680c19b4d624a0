//! Payload fetched with a single HTTP GET

use async_trait::async_trait;
use tracing::{debug, info};

use super::DashboardSource;
use crate::LoadError;

/// Static JSON endpoint
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DashboardSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        info!("Fetching alumni data from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());

        Ok(body.to_vec())
    }

    fn source_name(&self) -> &str {
        &self.url
    }
}
