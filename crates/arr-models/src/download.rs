use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::service::Service;
use crate::status::DownloadStatus;
use crate::values::{FileSize, Progress};

/// Canonical download (queue entry) shared by every backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadItem {
    pub id: i64,
    pub name: String,
    pub size: FileSize,
    pub size_remaining: FileSize,
    pub progress: Progress,
    pub status: DownloadStatus,
    pub source: Service,
    /// Time until the download client expects to finish. `None` means the
    /// backend did not report an ETA, which is not the same as zero.
    pub eta: Option<Duration>,
    pub download_client: String,
    pub indexer: String,
    pub output_path: String,
    pub media_id: Option<i64>,
    pub media_title: Option<String>,
    pub error_message: Option<String>,
}

impl DownloadItem {
    pub fn is_completed(&self) -> bool {
        self.status == DownloadStatus::Completed
    }

    pub fn is_failed(&self) -> bool {
        self.status == DownloadStatus::Failed
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DownloadItemCollection {
    items: Vec<DownloadItem>,
}

impl DownloadItemCollection {
    pub fn new(items: Vec<DownloadItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DownloadItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DownloadItem> {
        self.items.get(index)
    }

    pub fn all(&self) -> &[DownloadItem] {
        &self.items
    }

    pub fn active(&self) -> Self {
        self.filtered(|item| item.status.is_active())
    }

    pub fn completed(&self) -> Self {
        self.filtered(DownloadItem::is_completed)
    }

    pub fn failed(&self) -> Self {
        self.filtered(DownloadItem::is_failed)
    }

    pub fn total_size(&self) -> FileSize {
        self.items.iter().map(|item| item.size).sum()
    }

    pub fn total_remaining(&self) -> FileSize {
        self.items.iter().map(|item| item.size_remaining).sum()
    }

    fn filtered(&self, predicate: impl Fn(&DownloadItem) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }
}

impl IntoIterator for DownloadItemCollection {
    type Item = DownloadItem;
    type IntoIter = std::vec::IntoIter<DownloadItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DownloadItemCollection {
    type Item = &'a DownloadItem;
    type IntoIter = std::slice::Iter<'a, DownloadItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<DownloadItem> for DownloadItemCollection {
    fn from_iter<I: IntoIterator<Item = DownloadItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
