//! Configuration for loading and presenting the dashboard

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::sources::{DashboardSource, FileSource, HttpSource};
use crate::LoadError;

/// Published dataset the dashboard reads by default
pub const DEFAULT_SOURCE_URL: &str = "https://ppl-ai-code-interpreter-files.s3.amazonaws.com/web/direct-files/ac6b6eb251b63e635b5136300edbd758/1e207528-84b7-4e84-acb6-cf8df580adf0/97d5c1d8.json";

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "alumni-dashboard.json";

/// Environment variable that overrides the configured source
pub const SOURCE_ENV_VAR: &str = "ALUMNI_DASHBOARD_SOURCE";

/// Errors reading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the dashboard payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    Url(String),
    File(PathBuf),
}

impl SourceConfig {
    /// Interpret a user-supplied location: `http(s)://` is a URL, anything
    /// else a file path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SourceConfig::Url(trimmed.to_string())
        } else {
            SourceConfig::File(PathBuf::from(trimmed))
        }
    }

    /// Build the source this config points at
    pub fn build(&self) -> Result<Box<dyn DashboardSource>, LoadError> {
        Ok(match self {
            SourceConfig::Url(url) => Box::new(HttpSource::new(url.clone())?),
            SourceConfig::File(path) => Box::new(FileSource::new(path.clone())),
        })
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Payload location
    pub source: SourceConfig,

    /// How long the loading indicator stays up after a successful load
    pub loading_delay_ms: u64,

    /// Lifetime of transient notifications
    pub notification_secs: u64,

    /// Default file name offered for the PDF report
    pub report_file_name: String,

    /// Initial window size in logical points
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            loading_delay_ms: 1000,
            notification_secs: 3,
            report_file_name: "alumni-dashboard-report.pdf".to_string(),
            window_size: [1280.0, 860.0],
        }
    }
}

impl DashboardConfig {
    /// Load settings from `path`, or from `alumni-dashboard.json` in the
    /// working directory if it exists, then apply the environment override.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Ok(location) = std::env::var(SOURCE_ENV_VAR) {
            config.apply_source_override(&location);
        }

        Ok(config)
    }

    /// Parse a JSON config file; unspecified keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Reading config from {:?}", path);

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Point the dashboard at `location`; blank values are ignored
    pub fn apply_source_override(&mut self, location: &str) {
        if location.trim().is_empty() {
            return;
        }
        self.source = SourceConfig::parse(location);
        info!("Source overridden to {:?}", self.source);
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}
