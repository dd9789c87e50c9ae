use serde_json::json;
use std::sync::Arc;

use super::{parse, parse_object};
use crate::client::RestClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::options::{
    paged_params, PaginationOptions, QueryParams, QueueOptions, RequestOptions, SortOptions,
};
use crate::responses::{QueuePage, QueueRecord, QueueStatus};

const DEFAULT_PAGE_SIZE: u32 = 50;

pub struct QueueActions {
    client: Arc<dyn RestClient>,
}

impl QueueActions {
    pub fn new(client: Arc<dyn RestClient>) -> Self {
        Self { client }
    }

    /// One page of the download queue, 50 records per page unless `pagination` says otherwise
    pub async fn all(
        &self,
        pagination: Option<PaginationOptions>,
        sort: Option<&SortOptions>,
        filters: Option<&QueueOptions>,
    ) -> Result<QueuePage> {
        let params = paged_params(
            pagination,
            DEFAULT_PAGE_SIZE,
            sort,
            filters.map(|f| f as &dyn RequestOptions),
        );
        parse(self.client.get(Endpoint::Queue.into(), &params).await?)
    }

    pub async fn get(&self, id: i64) -> Result<QueueRecord> {
        parse_object(self.client.get(Endpoint::QueueById.with_id(id), &QueryParams::new()).await?)
    }

    /// The whole queue without paging
    pub async fn details(&self, filters: Option<&QueueOptions>) -> Result<Vec<QueueRecord>> {
        let params = filters.map(RequestOptions::to_params).unwrap_or_default();
        parse(self.client.get(Endpoint::QueueDetails.into(), &params).await?)
    }

    pub async fn delete(&self, id: i64, remove_from_client: bool, blocklist: bool) -> Result<()> {
        let params = QueryParams::new()
            .with("removeFromClient", remove_from_client)
            .with("blocklist", blocklist);
        self.client.delete(Endpoint::QueueById.with_id(id), &params).await
    }

    /// Remove several queue entries at once. The ids travel in the request body.
    pub async fn bulk_delete(
        &self,
        ids: &[i64],
        remove_from_client: bool,
        blocklist: bool,
    ) -> Result<()> {
        let params = QueryParams::new()
            .with("removeFromClient", remove_from_client)
            .with("blocklist", blocklist);
        self.client
            .delete_with_body(Endpoint::QueueBulk.into(), &params, &json!({ "ids": ids }))
            .await
    }

    pub async fn status(&self) -> Result<QueueStatus> {
        parse(self.client.get(Endpoint::QueueStatus.into(), &QueryParams::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Route;
    use crate::testing::{factory, FakeRestClient, HttpMethod};

    fn setup() -> (Arc<FakeRestClient>, QueueActions) {
        let fake = Arc::new(FakeRestClient::new());
        let actions = QueueActions::new(fake.clone());
        (fake, actions)
    }

    #[tokio::test]
    async fn test_all_uses_default_page_size() {
        let (fake, queue) = setup();
        fake.on_get(
            Endpoint::Queue,
            factory::page(
                1,
                50,
                2,
                vec![factory::queue_record(1), factory::failed_queue_record(2)],
            ),
        );

        let page = queue.all(None, None, None).await.unwrap();
        assert_eq!(page.total_records, 2);
        assert_eq!(page.records[0].progress(), 50.0);
        assert!(page.records[1].has_error());

        let params = fake.last_call().unwrap().params;
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("pageSize"), Some("50"));
    }

    #[tokio::test]
    async fn test_all_with_options() {
        let (fake, queue) = setup();
        let filters = QueueOptions::default().with_include_movie(true);
        queue
            .all(
                Some(PaginationOptions::new(2, 20)),
                Some(&SortOptions::by("timeleft").ascending()),
                Some(&filters),
            )
            .await
            .unwrap();

        let params = fake.last_call().unwrap().params;
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("pageSize"), Some("20"));
        assert_eq!(params.get("sortKey"), Some("timeleft"));
        assert_eq!(params.get("sortDirection"), Some("ascending"));
        assert_eq!(params.get("includeMovie"), Some("true"));
        assert_eq!(params.get("includeUnknownMovieItems"), None);
    }

    #[tokio::test]
    async fn test_empty_queue() {
        let (_fake, queue) = setup();
        let page = queue.all(None, None, None).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_records, 0);
    }

    #[tokio::test]
    async fn test_get() {
        let (fake, queue) = setup();
        fake.on_get(Endpoint::QueueById.with_id(8), factory::queue_record(8));

        let record = queue.get(8).await.unwrap();
        assert_eq!(record.id, 8);
        assert_eq!(record.size_gb(), 4.19);

        // Nothing scripted: the endpoint answers null
        let empty = queue.get(9).await.unwrap();
        assert_eq!(empty.id, 0);
        assert_eq!(empty.status, "unknown");
    }

    #[tokio::test]
    async fn test_details() {
        let (fake, queue) = setup();
        fake.on_get(
            Endpoint::QueueDetails,
            serde_json::json!([factory::queue_record(1), factory::completed_queue_record(2)]),
        );

        let records = queue.details(None).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].is_completed());
        assert!(fake.last_call().unwrap().params.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let (fake, queue) = setup();
        queue.delete(12, true, false).await.unwrap();

        let call = fake.last_call().unwrap();
        assert_eq!(call.method, HttpMethod::Delete);
        assert_eq!(call.route, Endpoint::QueueById.with_id(12));
        assert_eq!(call.params.get("removeFromClient"), Some("true"));
        assert_eq!(call.params.get("blocklist"), Some("false"));
    }

    #[tokio::test]
    async fn test_bulk_delete() {
        let (fake, queue) = setup();
        queue.bulk_delete(&[1, 2, 3], false, true).await.unwrap();

        let call = fake.last_call().unwrap();
        assert_eq!(call.route, Route::from(Endpoint::QueueBulk));
        assert_eq!(call.body, Some(json!({"ids": [1, 2, 3]})));
        assert_eq!(call.params.get("blocklist"), Some("true"));
    }

    #[tokio::test]
    async fn test_status() {
        let (fake, queue) = setup();
        fake.on_get(Endpoint::QueueStatus, json!({"totalCount": 3, "count": 3, "warnings": true}));

        let status = queue.status().await.unwrap();
        assert_eq!(status.total_count, 3);
        assert!(status.warnings);
    }
}
