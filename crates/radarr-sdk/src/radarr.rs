use arr_models::{DownloadItemCollection, Movie, Service, SystemSummary};
use async_trait::async_trait;
use radarr_config::RadarrConfig;
use std::sync::Arc;
use tracing::debug;

use crate::actions::{
    CalendarActions, CommandActions, HistoryActions, MovieActions, QueueActions, SystemActions,
    WantedActions,
};
use crate::client::{HttpRestClient, RestClient};
use crate::error::{RadarrError, Result};
use crate::mapper;
use crate::options::PaginationOptions;
use crate::pagination::collect_all;
use crate::responses::QueueRecord;
use crate::traits::MediaService;

const DOWNLOADS_PAGE_SIZE: u32 = 50;

/// Entry point to a Radarr instance.
///
/// All action modules share one transport and are built together with the
/// facade, so the accessors are plain borrows.
pub struct Radarr {
    client: Arc<dyn RestClient>,
    movies: MovieActions,
    queue: QueueActions,
    history: HistoryActions,
    calendar: CalendarActions,
    command: CommandActions,
    system: SystemActions,
    wanted: WantedActions,
}

impl Radarr {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self {
            movies: MovieActions::new(client.clone()),
            queue: QueueActions::new(client.clone()),
            history: HistoryActions::new(client.clone()),
            calendar: CalendarActions::new(client.clone()),
            command: CommandActions::new(client.clone()),
            system: SystemActions::new(client.clone()),
            wanted: WantedActions::new(client.clone()),
            client,
        }
    }

    /// Validate `config` and connect over HTTP
    pub fn from_config(config: &RadarrConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| RadarrError::Config(e.to_string()))?;
        debug!("Connecting to Radarr at {}", config.base_url());
        let client = HttpRestClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Connect using the config file at the default location plus `RADARR_*` overrides
    pub fn from_default_config() -> Result<Self> {
        let config = RadarrConfig::load().map_err(|e| RadarrError::Config(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Connect with default settings for everything but the address and key
    pub fn connect(host: impl Into<String>, port: u16, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&RadarrConfig::new(host, port, api_key))
    }

    pub fn movie_api(&self) -> &MovieActions {
        &self.movies
    }

    pub fn queue(&self) -> &QueueActions {
        &self.queue
    }

    pub fn history(&self) -> &HistoryActions {
        &self.history
    }

    pub fn calendar(&self) -> &CalendarActions {
        &self.calendar
    }

    pub fn command(&self) -> &CommandActions {
        &self.command
    }

    pub fn system(&self) -> &SystemActions {
        &self.system
    }

    pub fn wanted(&self) -> &WantedActions {
        &self.wanted
    }

    /// The underlying transport, for endpoints the action modules do not cover
    pub fn api(&self) -> &Arc<dyn RestClient> {
        &self.client
    }

    /// Every queue entry as a canonical download
    pub async fn downloads(&self) -> Result<DownloadItemCollection> {
        let records: Vec<QueueRecord> =
            collect_all(DOWNLOADS_PAGE_SIZE, |pagination: PaginationOptions| {
                self.queue.all(Some(pagination), None, None)
            })
            .await?;
        records.iter().map(mapper::map_queue_record).collect()
    }

    pub async fn movies(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.all(None).await?;
        mapper::map_movie_collection(&movies)
    }

    pub async fn movie(&self, id: i64) -> Result<Movie> {
        let movie = self.movies.get(id).await?;
        mapper::map_movie(&movie)
    }

    /// Version details plus health. Healthy means no outstanding health checks.
    pub async fn system_summary(&self) -> Result<SystemSummary> {
        let status = self.system.status().await?;
        let health = self.system.health().await?;
        Ok(mapper::map_system_summary(&status, &health))
    }
}

#[async_trait]
impl MediaService for Radarr {
    type Error = RadarrError;

    fn service(&self) -> Service {
        Service::Radarr
    }

    async fn downloads(&self) -> Result<DownloadItemCollection> {
        Radarr::downloads(self).await
    }

    async fn movies(&self) -> Result<Vec<Movie>> {
        Radarr::movies(self).await
    }

    async fn movie(&self, id: i64) -> Result<Movie> {
        Radarr::movie(self, id).await
    }

    async fn system_summary(&self) -> Result<SystemSummary> {
        Radarr::system_summary(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_rejects_missing_api_key() {
        let config = RadarrConfig::default();
        assert!(matches!(Radarr::from_config(&config), Err(RadarrError::Config(_))));
    }

    #[test]
    fn test_connect() {
        let radarr = Radarr::connect("localhost", 7878, "0123456789abcdef").unwrap();
        assert_eq!(radarr.service(), Service::Radarr);
    }
}
