use std::sync::Arc;

use super::parse;
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::{CalendarOptions, QueryParams, RequestOptions};
use crate::responses::{Movie, MovieCollection};

pub struct CalendarActions {
    client: Arc<dyn RestClient>,
}

impl CalendarActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    /// Movies with a release inside the window. Radarr picks the window when no dates are given.
    pub async fn all(&self, options: Option<&CalendarOptions>) -> Result<MovieCollection> {
        let params = options.map(RequestOptions::to_params).unwrap_or_default();
        parse(self.client.get(Endpoint::Calendar.into(), &params).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Movie> {
        parse(self.client.get(Endpoint::CalendarById.with_id(id), &QueryParams::new()).await?)
    }
}
