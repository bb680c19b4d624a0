pub mod file_source;
pub mod http_source;

pub use file_source::FileSource;
pub use http_source::HttpSource;

use async_trait::async_trait;

use crate::LoadError;

/// Where the dashboard payload comes from
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the raw payload body
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable name for logs and error messages
    fn source_name(&self) -> &str;
}
