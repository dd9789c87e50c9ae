use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::service::Service;
use crate::status::MediaStatus;
use crate::values::FileSize;

/// Canonical movie, independent of the backend it was collected from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: Option<u32>,
    pub status: MediaStatus,
    pub monitored: bool,
    pub source: Service,
    pub size_on_disk: FileSize,
    pub path: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fanart_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Duration>,
    pub has_file: bool,
}

impl Movie {
    pub fn is_downloaded(&self) -> bool {
        self.has_file
    }

    /// Monitored but nothing on disk yet
    pub fn is_missing(&self) -> bool {
        self.monitored && !self.has_file
    }
}
