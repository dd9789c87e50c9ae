use arr_models::values::round2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::de;
use crate::mapper::parse_timespan;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// `system/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SystemStatus {
    #[serde(default, deserialize_with = "de::null_default")]
    pub app_name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub instance_name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub version: String,
    pub build_time: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub startup_path: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub app_data: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub os_name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub os_version: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub is_docker: bool,
    #[serde(default, deserialize_with = "de::null_default")]
    pub branch: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub authentication: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub url_base: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub runtime_version: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub runtime_name: String,
    /// RFC 3339
    pub start_time: Option<String>,
    pub migration_version: Option<i64>,
    pub package_version: Option<String>,
    pub package_author: Option<String>,
}

/// A failing check from `health`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HealthCheck {
    #[serde(default, deserialize_with = "de::null_default")]
    pub source: String,
    /// notice, warning or error
    #[serde(default, rename(deserialize = "type"), deserialize_with = "de::null_default")]
    pub check_type: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub message: String,
    pub wiki_url: Option<String>,
}

impl HealthCheck {
    pub fn is_error(&self) -> bool {
        self.check_type == "error"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DiskSpace {
    #[serde(default, deserialize_with = "de::null_default")]
    pub path: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub label: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub free_space: u64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub total_space: u64,
}

impl DiskSpace {
    pub fn free_space_gb(&self) -> f64 {
        round2(self.free_space as f64 / BYTES_PER_GB)
    }

    pub fn total_space_gb(&self) -> f64 {
        round2(self.total_space as f64 / BYTES_PER_GB)
    }

    /// 0 for a volume that reports no capacity
    pub fn used_percentage(&self) -> f64 {
        if self.total_space == 0 {
            return 0.0;
        }
        let used = self.total_space.saturating_sub(self.free_space);
        round2(used as f64 / self.total_space as f64 * 100.0)
    }
}

/// A background job from `system/task`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ScheduledTask {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub task_name: String,
    /// Minutes between runs
    #[serde(default, deserialize_with = "de::null_default")]
    pub interval: u64,
    pub last_execution: Option<String>,
    pub last_start_time: Option<String>,
    pub next_execution: Option<String>,
    /// `[d.]hh:mm:ss`
    pub last_duration: Option<String>,
}

impl ScheduledTask {
    pub fn last_run_duration(&self) -> Option<Duration> {
        self.last_duration.as_deref().and_then(parse_timespan)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Backup {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub path: String,
    /// scheduled, manual or update
    #[serde(default, rename(deserialize = "type"), deserialize_with = "de::null_default")]
    pub backup_type: String,
    #[serde(default, deserialize_with = "de::null_default")]
    pub size: u64,
    pub time: Option<String>,
}
