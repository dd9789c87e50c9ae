use std::future::Future;
use tracing::{debug, warn};

use crate::error::{RadarrError, Result};
use crate::options::PaginationOptions;
use crate::responses::Page;

/// Pages tolerated beyond what the first page's `total_records` implies
const PAGE_SLACK: u32 = 2;

/// Fetch every page of a paginated endpoint, starting at page 1, and return
/// the records in server order.
///
/// Pages are requested one after another until the collected count reaches the
/// server's `total_records`. An empty page before that point fails with
/// [`RadarrError::PaginationStalled`]. The page budget is fixed from the first
/// response; running past it (plus a small slack for records added meanwhile)
/// fails with [`RadarrError::PaginationOverrun`].
pub async fn collect_all<T, F, Fut>(page_size: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PaginationOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let page_size = page_size.max(1);
    let mut records = Vec::new();
    let mut page = 1;
    let mut max_pages = None;

    loop {
        let response = fetch(PaginationOptions::new(page, page_size)).await?;
        let total = response.total_records;
        let received = response.records.len();
        records.extend(response.records);

        debug!(
            "Fetched page {}: {} records, {} of {} collected",
            page,
            received,
            records.len(),
            total
        );

        if records.len() >= total {
            return Ok(records);
        }

        if received == 0 {
            warn!(
                "Page {} came back empty with {} of {} records collected",
                page,
                records.len(),
                total
            );
            return Err(RadarrError::PaginationStalled {
                page,
                collected: records.len(),
                total,
            });
        }

        let budget = *max_pages.get_or_insert_with(|| {
            let expected = total.div_ceil(page_size as usize);
            u32::try_from(expected).unwrap_or(u32::MAX).saturating_add(PAGE_SLACK)
        });
        if page >= budget {
            warn!(
                "Stopping after {} pages with {} of {} records collected",
                page,
                records.len(),
                total
            );
            return Err(RadarrError::PaginationOverrun {
                pages: page,
                collected: records.len(),
                total,
            });
        }

        page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::Movie;
    use serde_json::json;
    use std::cell::RefCell;

    fn page(page: u32, page_size: u32, total: usize, ids: &[i64]) -> Page<Movie> {
        serde_json::from_value(json!({
            "page": page,
            "pageSize": page_size,
            "totalRecords": total,
            "records": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    /// Serves `total` sequential ids in pages of the requested size
    fn server(
        total: usize,
    ) -> impl FnMut(PaginationOptions) -> std::future::Ready<Result<Page<Movie>>> {
        move |options| {
            let start = (options.page as usize - 1) * options.page_size as usize;
            let end = (start + options.page_size as usize).min(total);
            let ids: Vec<i64> = (start.min(end)..end).map(|i| i as i64 + 1).collect();
            std::future::ready(Ok(page(options.page, options.page_size, total, &ids)))
        }
    }

    #[tokio::test]
    async fn test_two_pages_in_order() {
        let responses = RefCell::new(vec![page(2, 2, 3, &[3]), page(1, 2, 3, &[1, 2])]);
        let movies = collect_all(2, |_| {
            let next = responses.borrow_mut().pop().unwrap();
            async move { Ok(next) }
        })
        .await
        .unwrap();

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_call_count_is_ceil_of_total_over_page_size() {
        for (total, page_size, expected_calls) in
            [(250, 100, 3), (200, 100, 2), (1, 100, 1), (7, 3, 3)]
        {
            let mut calls = Vec::new();
            let mut serve = server(total);
            let records = collect_all(page_size, |options| {
                calls.push(options);
                serve(options)
            })
            .await
            .unwrap();

            assert_eq!(records.len(), total);
            assert_eq!(calls.len(), expected_calls, "total {} / page size {}", total, page_size);
            assert!(calls
                .iter()
                .enumerate()
                .all(|(i, o)| o.page == i as u32 + 1 && o.page_size == page_size));
        }
    }

    #[tokio::test]
    async fn test_empty_result_takes_one_call() {
        let mut calls = 0;
        let records = collect_all(100, |options| {
            calls += 1;
            std::future::ready(Ok(page(options.page, 100, 0, &[])))
        })
        .await
        .unwrap();
        assert!(records.is_empty());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_empty_page_short_of_total_stalls() {
        let err = collect_all(2, |options| {
            let ids: &[i64] = if options.page == 1 { &[1, 2] } else { &[] };
            std::future::ready(Ok(page(options.page, 2, 5, ids)))
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            RadarrError::PaginationStalled { page: 2, collected: 2, total: 5 }
        ));
    }

    #[tokio::test]
    async fn test_growing_total_overruns() {
        // Every page reports a total one record ahead of what was served
        let err = collect_all(2, |options| {
            let first = (options.page as i64 - 1) * 2 + 1;
            let total = options.page as usize * 2 + 1;
            std::future::ready(Ok(page(options.page, 2, total, &[first, first + 1])))
        })
        .await
        .unwrap_err();

        // First page implies 2 pages, plus slack
        assert!(matches!(
            err,
            RadarrError::PaginationOverrun { pages: 4, collected: 8, total: 9 }
        ));
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result: Result<Vec<Movie>> = collect_all(10, |_| {
            std::future::ready(Err(RadarrError::Status {
                status: 401,
                url: "http://localhost:7878/api/v3/wanted/missing".to_string(),
                body: "Unauthorized".to_string(),
            }))
        })
        .await;
        assert!(matches!(result, Err(RadarrError::Status { status: 401, .. })));
    }
}
