use arr_models::{DownloadItemCollection, Movie, Service, SystemSummary};
use async_trait::async_trait;

/// A media-management backend seen through the cross-service models
#[async_trait]
pub trait MediaService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static + std::fmt::Display;

    fn service(&self) -> Service;

    // Downloads
    async fn downloads(&self) -> Result<DownloadItemCollection, Self::Error>;

    // Library
    async fn movies(&self) -> Result<Vec<Movie>, Self::Error>;
    async fn movie(&self, id: i64) -> Result<Movie, Self::Error>;

    // Health
    async fn system_summary(&self) -> Result<SystemSummary, Self::Error>;
}
