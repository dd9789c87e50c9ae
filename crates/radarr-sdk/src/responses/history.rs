use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;
use super::movie::Movie;
use super::page::Page;
use crate::enums::HistoryEventType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HistoryRecord {
    #[serde(default, deserialize_with = "de::null_default")]
    pub id: i64,
    pub movie_id: Option<i64>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub source_title: String,
    #[serde(default = "de::unknown", deserialize_with = "de::null_unknown")]
    pub event_type: String,
    pub quality: Option<Value>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de::null_default")]
    pub download_id: String,
    pub data: Option<Value>,
    pub movie: Option<Movie>,
}

impl HistoryRecord {
    pub fn is_grabbed(&self) -> bool {
        self.event_type == HistoryEventType::Grabbed.as_str()
    }

    pub fn is_imported(&self) -> bool {
        self.event_type == HistoryEventType::DownloadFolderImported.as_str()
            || self.event_type == HistoryEventType::MovieFolderImported.as_str()
    }

    pub fn is_failed(&self) -> bool {
        self.event_type == HistoryEventType::DownloadFailed.as_str()
    }

    pub fn is_deleted(&self) -> bool {
        self.event_type == HistoryEventType::MovieFileDeleted.as_str()
    }

    pub fn event(&self) -> Option<HistoryEventType> {
        self.event_type.parse().ok()
    }
}

pub type HistoryPage = Page<HistoryRecord>;
