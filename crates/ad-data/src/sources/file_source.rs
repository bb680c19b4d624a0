//! Payload read from a local JSON file

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::DashboardSource;
use crate::LoadError;

/// Local copy of the dashboard payload
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl DashboardSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        info!("Reading alumni data from {:?}", self.path);
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
