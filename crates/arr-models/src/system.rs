use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service::Service;

/// A single failing health check reported by a backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthIssue {
    /// Severity as reported upstream (notice, warning, error)
    pub issue_type: String,
    pub message: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// Canonical system summary: version information plus outstanding health issues
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemSummary {
    pub source: Service,
    pub version: String,
    pub is_healthy: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub branch: String,
    pub runtime_version: String,
    pub os_name: String,
    pub health_issues: Vec<HealthIssue>,
}

impl SystemSummary {
    pub fn issue_count(&self) -> usize {
        self.health_issues.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = &HealthIssue> {
        self.health_issues
            .iter()
            .filter(|issue| issue.issue_type.eq_ignore_ascii_case("error"))
    }
}
