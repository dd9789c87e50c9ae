use std::sync::Arc;

use super::parse;
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::{paged_params, PaginationOptions, RequestOptions, SortOptions, WantedOptions};
use crate::pagination::collect_all;
use crate::responses::{Movie, MovieCollection, Page};

const DEFAULT_PAGE_SIZE: u32 = 10;
const COLLECT_PAGE_SIZE: u32 = 100;

pub struct WantedActions {
    client: Arc<dyn RestClient>,
}

impl WantedActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    /// Monitored movies that have no file
    pub async fn missing(
        &self,
        pagination: Option<PaginationOptions>,
        sort: Option<&SortOptions>,
        filters: Option<&WantedOptions>,
    ) -> Result<Page<Movie>> {
        self.page(Endpoint::WantedMissing, pagination, sort, filters).await
    }

    /// Movies whose file has not reached the quality profile's cutoff
    pub async fn cutoff(
        &self,
        pagination: Option<PaginationOptions>,
        sort: Option<&SortOptions>,
        filters: Option<&WantedOptions>,
    ) -> Result<Page<Movie>> {
        self.page(Endpoint::WantedCutoff, pagination, sort, filters).await
    }

    pub async fn all_missing(&self, filters: Option<&WantedOptions>) -> Result<MovieCollection> {
        let movies = collect_all(COLLECT_PAGE_SIZE, |pagination| {
            self.missing(Some(pagination), None, filters)
        })
        .await?;
        Ok(MovieCollection::new(movies))
    }

    pub async fn all_cutoff(&self, filters: Option<&WantedOptions>) -> Result<MovieCollection> {
        let movies = collect_all(COLLECT_PAGE_SIZE, |pagination| {
            self.cutoff(Some(pagination), None, filters)
        })
        .await?;
        Ok(MovieCollection::new(movies))
    }

    async fn page(
        &self,
        endpoint: Endpoint,
        pagination: Option<PaginationOptions>,
        sort: Option<&SortOptions>,
        filters: Option<&WantedOptions>,
    ) -> Result<Page<Movie>> {
        let params = paged_params(
            pagination,
            DEFAULT_PAGE_SIZE,
            sort,
            filters.map(|f| f as &dyn RequestOptions),
        );
        parse(self.client.get(endpoint.into(), &params).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadarrError;
    use crate::testing::{factory, FakeRestClient, HttpMethod};

    fn setup() -> (Arc<FakeRestClient>, WantedActions) {
        let fake = Arc::new(FakeRestClient::new());
        let actions = WantedActions::new(fake.clone());
        (fake, actions)
    }

    #[tokio::test]
    async fn test_missing_single_page() {
        let (fake, wanted) = setup();
        fake.on_get(
            Endpoint::WantedMissing,
            factory::page(1, 10, 12, (1..=10).map(factory::missing_movie).collect()),
        );

        let page = wanted
            .missing(None, None, Some(&WantedOptions::only_monitored()))
            .await
            .unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page.total_records, 12);
        assert!(page.has_more());

        let params = fake.last_call().unwrap().params;
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("pageSize"), Some("10"));
        assert_eq!(params.get("monitored"), Some("true"));
    }

    #[tokio::test]
    async fn test_all_missing_collects_pages_in_order() {
        let (fake, wanted) = setup();
        fake.on_get(
            Endpoint::WantedMissing,
            factory::page(1, 2, 3, vec![factory::missing_movie(1), factory::missing_movie(2)]),
        )
        .on_get(
            Endpoint::WantedMissing,
            factory::page(2, 2, 3, vec![factory::missing_movie(3)]),
        );

        let movies = wanted.all_missing(None).await.unwrap();
        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let calls = fake.calls_to(HttpMethod::Get, Endpoint::WantedMissing);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].params.get("page"), Some("1"));
        assert_eq!(calls[0].params.get("pageSize"), Some("100"));
        assert_eq!(calls[1].params.get("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_all_cutoff_empty() {
        let (fake, wanted) = setup();
        let movies = wanted.all_cutoff(Some(&WantedOptions::only_unmonitored())).await.unwrap();

        assert!(movies.is_empty());
        let calls = fake.calls_to(HttpMethod::Get, Endpoint::WantedCutoff);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].params.get("monitored"), Some("false"));
    }

    #[tokio::test]
    async fn test_all_cutoff_stalls_on_short_server() {
        let (fake, wanted) = setup();
        fake.on_get(
            Endpoint::WantedCutoff,
            factory::page(1, 100, 150, (1..=100).map(factory::movie).collect()),
        )
        .on_get(Endpoint::WantedCutoff, factory::page(2, 100, 150, vec![]));

        let err = wanted.all_cutoff(None).await.unwrap_err();
        assert!(matches!(
            err,
            RadarrError::PaginationStalled { page: 2, collected: 100, total: 150 }
        ));
    }
}
