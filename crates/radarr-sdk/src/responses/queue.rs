use arr_models::values::round2;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::de;
use super::movie::Movie;
use super::page::Page;
use crate::mapper::parse_timespan;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One entry of the download queue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QueueRecord {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    pub movie_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub status: String,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub tracked_download_status: String,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub tracked_download_state: String,
    pub quality: Option<Value>,
    /// Bytes
    #[serde(default, deserialize_with = "de::null_default")]
    pub size: f64,
    /// Bytes still to download
    #[serde(default, rename(deserialize = "sizeleft"), deserialize_with = "de::null_default")]
    pub size_left: f64,
    /// `[d.]hh:mm:ss`
    #[serde(rename(deserialize = "timeleft"))]
    pub time_left: Option<String>,
    pub estimated_completion_time: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub download_client: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub download_id: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub protocol: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub indexer: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub output_path: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub status_messages: Vec<Value>,
    pub custom_formats: Option<Value>,
    pub error_message: Option<String>,
    pub movie: Option<Movie>,
}

impl QueueRecord {
    /// Downloaded share in percent, 0 when the size is unknown
    pub fn progress(&self) -> f64 {
        if self.size <= 0.0 {
            return 0.0;
        }
        round2((self.size - self.size_left) / self.size * 100.0)
    }

    pub fn size_gb(&self) -> f64 {
        round2(self.size / BYTES_PER_GB)
    }

    pub fn size_left_gb(&self) -> f64 {
        round2(self.size_left / BYTES_PER_GB)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.tracked_download_state.as_str(), "importPending" | "imported")
    }

    pub fn has_error(&self) -> bool {
        matches!(self.tracked_download_status.as_str(), "warning" | "error")
    }

    /// `None` when Radarr did not report a time left
    pub fn eta(&self) -> Option<Duration> {
        self.time_left.as_deref().and_then(parse_timespan)
    }
}

/// Aggregate counters from `queue/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QueueStatus {
    #[serde(default, deserialize_with = "de::null_default")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub unknown_count: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub errors: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub warnings: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub unknown_errors: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub unknown_warnings: bool,
}

pub type QueuePage = Page<QueueRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> QueueRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let record = record(json!({}));
        assert_eq!(record.id, 0);
        assert_eq!(record.status, "unknown");
        assert_eq!(record.tracked_download_status, "unknown");
        assert_eq!(record.tracked_download_state, "unknown");
        assert_eq!(record.size, 0.0);
        assert_eq!(record.size_left, 0.0);
        assert_eq!(record.download_client, "");
        assert_eq!(record.output_path, "");
        assert!(record.title.is_none());
        assert!(record.status_messages.is_empty());
        assert!(record.error_message.is_none());
        assert!(record.movie.is_none());
        assert_eq!(record.eta(), None);
    }

    #[test]
    fn test_progress_and_sizes() {
        let record = record(json!({
            "size": 4_500_000_000u64,
            "sizeleft": 1_125_000_000u64,
            "timeleft": "01:30:00",
        }));
        assert_eq!(record.progress(), 75.0);
        assert_eq!(record.size_gb(), 4.19);
        assert_eq!(record.size_left_gb(), 1.05);
        assert_eq!(record.eta(), Some(Duration::from_secs(5400)));
    }

    #[test]
    fn test_progress_rounds_to_two_decimals() {
        let record = record(json!({"size": 3, "sizeleft": 2}));
        assert_eq!(record.progress(), 33.33);
    }

    #[test]
    fn test_progress_with_zero_size() {
        let record = record(json!({"size": 0, "sizeleft": 100}));
        assert_eq!(record.progress(), 0.0);
    }

    #[test]
    fn test_completion_and_error_flags() {
        for (state, completed) in
            [("importPending", true), ("imported", true), ("downloading", false)]
        {
            let record = record(json!({"trackedDownloadState": state}));
            assert_eq!(record.is_completed(), completed, "state {}", state);
        }
        for (status, error) in [("warning", true), ("error", true), ("ok", false)] {
            let record = record(json!({"trackedDownloadStatus": status}));
            assert_eq!(record.has_error(), error, "status {}", status);
        }
    }

    #[test]
    fn test_embedded_movie() {
        let record = record(json!({"movieId": 5, "movie": {"id": 5, "title": "Heat"}}));
        assert_eq!(record.movie.map(|m| m.title), Some("Heat".to_string()));
    }

    #[test]
    fn test_queue_status() {
        let status: QueueStatus =
            serde_json::from_value(json!({"totalCount": 4, "count": 3, "errors": true})).unwrap();
        assert_eq!(status.total_count, 4);
        assert_eq!(status.count, 3);
        assert!(status.errors);
        assert!(!status.warnings);
    }
}
