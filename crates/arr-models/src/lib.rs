pub mod download;
pub mod media;
pub mod service;
pub mod status;
pub mod system;
pub mod values;

pub use download::{DownloadItem, DownloadItemCollection};
pub use media::Movie;
pub use service::Service;
pub use status::{DownloadStatus, MediaStatus};
pub use system::{HealthIssue, SystemSummary};
pub use values::{FileSize, Progress};
