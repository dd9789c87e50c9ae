use serde::{Deserialize, Serialize};

/// Normalized media status shared by every backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaStatus {
    /// Known to exist but without a release date yet (tba/announced on Radarr)
    Announced,
    /// Playing in cinemas, no digital or physical release yet
    InCinemas,
    /// Released and monitored for download, but no file on disk
    Missing,
    /// A file for this item is on disk
    Downloaded,
    /// Removed from the upstream metadata source
    Deleted,
    /// The backend did not report a status
    Unknown,
}

/// Normalized download status shared by every backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DownloadStatus {
    Queued,
    Downloading,
    Paused,
    /// Finished in the download client, waiting for or running the import
    Importing,
    Completed,
    /// Still progressing but the backend raised a warning
    Warning,
    Failed,
    Unknown,
}

impl DownloadStatus {
    /// Whether the download still needs attention from the download client
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            DownloadStatus::Queued
                | DownloadStatus::Downloading
                | DownloadStatus::Paused
                | DownloadStatus::Importing
                | DownloadStatus::Warning
        )
    }
}
