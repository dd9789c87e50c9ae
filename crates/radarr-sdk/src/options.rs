use chrono::NaiveDate;

use crate::enums::{HistoryEventType, SortDirection};

/// Ordered query parameters. Setting a key that is already present replaces
/// its value in place, so merging option sets keeps a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set_opt<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Dates go over the wire as `YYYY-MM-DD`
    pub fn set_date(&mut self, key: &str, value: Option<NaiveDate>) {
        self.set_opt(key, value.map(|date| date.format("%Y-%m-%d")));
    }

    /// Id lists go over the wire comma-joined
    pub fn set_list(&mut self, key: &str, value: Option<&[i64]>) {
        if let Some(ids) = value {
            let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
            self.set(key, joined);
        }
    }

    pub fn merge(&mut self, other: QueryParams) {
        for (key, value) in other.0 {
            self.set(&key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A set of optional request parameters that knows its wire representation
pub trait RequestOptions {
    /// Only fields that are set end up in the result
    fn to_params(&self) -> QueryParams;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page: u32,
    pub page_size: u32,
}

impl PaginationOptions {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page_size, ..self }
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self { page: 1, page_size: 10 }
    }
}

impl RequestOptions for PaginationOptions {
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("page", self.page)
            .with("pageSize", self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub sort_key: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl SortOptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by(key: impl Into<String>) -> Self {
        Self {
            sort_key: Some(key.into()),
            sort_direction: None,
        }
    }

    pub fn ascending(self) -> Self {
        Self {
            sort_direction: Some(SortDirection::Ascending),
            ..self
        }
    }

    pub fn descending(self) -> Self {
        Self {
            sort_direction: Some(SortDirection::Descending),
            ..self
        }
    }
}

impl RequestOptions for SortOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("sortKey", self.sort_key.as_deref());
        params.set_opt("sortDirection", self.sort_direction.map(|d| d.as_str()));
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub unmonitored: Option<bool>,
    pub tags: Option<Vec<i64>>,
}

impl CalendarOptions {
    pub fn with_date_range(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end, ..self }
    }

    pub fn with_unmonitored(self, unmonitored: bool) -> Self {
        Self {
            unmonitored: Some(unmonitored),
            ..self
        }
    }

    pub fn with_tags(self, tags: Vec<i64>) -> Self {
        Self {
            tags: Some(tags),
            ..self
        }
    }
}

impl RequestOptions for CalendarOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_date("start", self.start);
        params.set_date("end", self.end);
        params.set_opt("unmonitored", self.unmonitored);
        params.set_list("tags", self.tags.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    pub event_type: Option<HistoryEventType>,
    pub include_movie: Option<bool>,
    pub movie_ids: Option<Vec<i64>>,
}

impl HistoryOptions {
    pub fn with_event_type(self, event_type: HistoryEventType) -> Self {
        Self {
            event_type: Some(event_type),
            ..self
        }
    }

    pub fn with_include_movie(self, include_movie: bool) -> Self {
        Self {
            include_movie: Some(include_movie),
            ..self
        }
    }

    pub fn with_movie_ids(self, movie_ids: Vec<i64>) -> Self {
        Self {
            movie_ids: Some(movie_ids),
            ..self
        }
    }
}

impl RequestOptions for HistoryOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("eventType", self.event_type.map(|e| e.numeric_value()));
        params.set_opt("includeMovie", self.include_movie);
        params.set_list("movieIds", self.movie_ids.as_deref());
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueOptions {
    pub include_unknown_movie_items: Option<bool>,
    pub include_movie: Option<bool>,
}

impl QueueOptions {
    pub fn with_include_unknown_movie_items(self, include: bool) -> Self {
        Self {
            include_unknown_movie_items: Some(include),
            ..self
        }
    }

    pub fn with_include_movie(self, include: bool) -> Self {
        Self {
            include_movie: Some(include),
            ..self
        }
    }
}

impl RequestOptions for QueueOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("includeUnknownMovieItems", self.include_unknown_movie_items);
        params.set_opt("includeMovie", self.include_movie);
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WantedOptions {
    pub monitored: Option<bool>,
}

impl WantedOptions {
    pub fn with_monitored(monitored: bool) -> Self {
        Self {
            monitored: Some(monitored),
        }
    }

    pub fn only_monitored() -> Self {
        Self::with_monitored(true)
    }

    pub fn only_unmonitored() -> Self {
        Self::with_monitored(false)
    }
}

impl RequestOptions for WantedOptions {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("monitored", self.monitored);
        params
    }
}

/// Assemble the parameters of a paginated list call: pagination (or the
/// endpoint's default page size), then sort, then filters.
pub(crate) fn paged_params(
    pagination: Option<PaginationOptions>,
    default_page_size: u32,
    sort: Option<&SortOptions>,
    filters: Option<&dyn RequestOptions>,
) -> QueryParams {
    let pagination = pagination.unwrap_or_else(|| PaginationOptions::new(1, default_page_size));
    let mut params = pagination.to_params();
    if let Some(sort) = sort {
        params.merge(sort.to_params());
    }
    if let Some(filters) = filters {
        params.merge(filters.to_params());
    }
    params
}
