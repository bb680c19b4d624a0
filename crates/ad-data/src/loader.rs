//! One-shot load of the dashboard payload into a `DataStore`

use serde::Deserialize;
use tracing::{debug, error, info};

use ad_core::{AlumniRecord, BatchDistributionEntry, DataStore, StateDistributionEntry, SummaryStats};

use crate::sources::DashboardSource;
use crate::LoadError;

/// Top-level payload; every key is optional
#[derive(Debug, Default, Deserialize)]
struct Payload {
    #[serde(default)]
    alumni_data: Option<Vec<AlumniRecord>>,
    #[serde(default)]
    batch_distribution: Option<Vec<BatchDistributionEntry>>,
    #[serde(default)]
    state_distribution: Option<Vec<StateDistributionEntry>>,
    #[serde(default)]
    summary_stats: Option<SummaryStats>,
}

/// Fetch and parse the payload from `source`. No retries.
pub async fn load(source: &dyn DashboardSource) -> Result<DataStore, LoadError> {
    info!("Loading alumni data from {}", source.source_name());

    let body = source.fetch().await.map_err(|e| {
        error!("Failed to fetch {}: {}", source.source_name(), e);
        e
    })?;

    let store = parse_payload(&body).map_err(|e| {
        error!("Failed to parse payload from {}: {}", source.source_name(), e);
        e
    })?;

    info!("Loaded {} alumni records", store.len());
    Ok(store)
}

/// Parse a payload body. Missing or `null` keys become empty containers.
pub fn parse_payload(body: &[u8]) -> Result<DataStore, LoadError> {
    let payload: Payload = serde_json::from_slice(body)?;

    let store = DataStore::new(
        payload.alumni_data.unwrap_or_default(),
        payload.batch_distribution.unwrap_or_default(),
        payload.state_distribution.unwrap_or_default(),
        payload.summary_stats.unwrap_or_default(),
    );

    debug!(
        "Payload: {} records, {} batches, {} states, summary {:?}",
        store.records.len(),
        store.batch_distribution.len(),
        store.state_distribution.len(),
        store.summary
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ad_core::SupportStatus;

    struct StaticSource(&'static str);

    #[async_trait]
    impl DashboardSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            Ok(self.0.as_bytes().to_vec())
        }

        fn source_name(&self) -> &str {
            "static"
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DashboardSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            Err(LoadError::Status(404))
        }

        fn source_name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_parse_single_record_payload() {
        let store = parse_payload(
            br#"{
                "alumni_data": [
                    {"name": "A", "batch": "B-1", "state": "TX", "support_status": "Yes"}
                ],
                "summary_stats": {"total_alumni": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records[0].support_status, SupportStatus::Yes);
        assert_eq!(store.summary.total_alumni(), 1);
        assert_eq!(store.summary.total_batches(), 16);
        assert!(store.batch_distribution.is_empty());
        assert!(store.state_distribution.is_empty());
    }

    #[test]
    fn test_missing_and_null_keys_default_to_empty() {
        let store = parse_payload(b"{}").unwrap();
        assert!(store.is_empty());

        let store = parse_payload(br#"{"alumni_data": null, "summary_stats": null}"#).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.summary, SummaryStats::default());
    }

    #[test]
    fn test_distributions_are_taken_verbatim() {
        let store = parse_payload(
            br#"{
                "batch_distribution": [{"batch": "B-13", "count": 42}],
                "state_distribution": [{"state": "TX", "count": 10, "percentage": 23.8}]
            }"#,
        )
        .unwrap();

        assert_eq!(store.batch_distribution[0].batch, "B-13");
        assert_eq!(store.batch_distribution[0].count, 42);
        assert_eq!(store.state_distribution[0].percentage, 23.8);
    }

    #[test]
    fn test_unparsable_body_is_an_error() {
        assert!(matches!(parse_payload(b"<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_payload(b"[1, 2]"), Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = StaticSource(r#"{"alumni_data": [{"name": "A"}, {"name": "B"}]}"#);
        let store = load(&source).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.headline_total(), 2);
    }

    #[tokio::test]
    async fn test_load_propagates_fetch_failure() {
        let result = load(&FailingSource).await;
        assert!(matches!(result, Err(LoadError::Status(404))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("alumni-dashboard-test-{}.json", std::process::id()));
        tokio::fs::write(&path, br#"{"alumni_data": [{"name": "File"}]}"#).await.unwrap();

        let store = load(&crate::FileSource::new(&path)).await.unwrap();
        assert_eq!(store.records[0].name, "File");

        let _ = tokio::fs::remove_file(&path).await;
    }
}
