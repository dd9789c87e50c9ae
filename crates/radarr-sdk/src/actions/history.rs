use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;
use std::sync::Arc;

use super::parse;
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::{
    paged_params, HistoryOptions, PaginationOptions, QueryParams, RequestOptions, SortOptions,
};
use crate::responses::{HistoryPage, HistoryRecord};

const DEFAULT_PAGE_SIZE: u32 = 10;

pub struct HistoryActions {
    client: Arc<dyn RestClient>,
}

impl HistoryActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    pub async fn all(
        &self,
        pagination: Option<PaginationOptions>,
        sort: Option<&SortOptions>,
        filters: Option<&HistoryOptions>,
    ) -> Result<HistoryPage> {
        let params = paged_params(
            pagination,
            DEFAULT_PAGE_SIZE,
            sort,
            filters.map(|f| f as &dyn RequestOptions),
        );
        parse(self.client.get(Endpoint::History.into(), &params).await?)
    }

    /// Every event after `date`, unpaged
    pub async fn since(
        &self,
        date: DateTime<Utc>,
        filters: Option<&HistoryOptions>,
    ) -> Result<Vec<HistoryRecord>> {
        let mut params =
            QueryParams::new().with("date", date.to_rfc3339_opts(SecondsFormat::Secs, true));
        if let Some(filters) = filters {
            params.merge(filters.to_params());
        }
        parse(self.client.get(Endpoint::HistorySince.into(), &params).await?)
    }

    pub async fn for_movie(
        &self,
        movie_id: i64,
        filters: Option<&HistoryOptions>,
    ) -> Result<Vec<HistoryRecord>> {
        let mut params = QueryParams::new().with("movieId", movie_id);
        if let Some(filters) = filters {
            params.merge(filters.to_params());
        }
        parse(self.client.get(Endpoint::HistoryMovie.into(), &params).await?)
    }

    /// Mark the grab behind a history event as failed so Radarr searches again
    pub async fn mark_failed(&self, id: i64) -> Result<()> {
        self.client.post(Endpoint::HistoryFailed.with_id(id), &json!({})).await?;
        Ok(())
    }
}
