use serde_json::{json, Value};

use crate::error::{RadarrError, Result};

const ID_PLACEHOLDER: &str = "{id}";

/// Every Radarr API route the SDK talks to, relative to `/api/{version}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Movie,
    MovieById,
    MovieLookup,
    MovieLookupTmdb,
    MovieLookupImdb,
    Queue,
    QueueById,
    QueueDetails,
    QueueStatus,
    QueueBulk,
    History,
    HistorySince,
    HistoryMovie,
    HistoryFailed,
    Calendar,
    CalendarById,
    Command,
    CommandById,
    SystemStatus,
    Health,
    DiskSpace,
    SystemTask,
    SystemTaskById,
    SystemBackup,
    WantedMissing,
    WantedCutoff,
}

impl Endpoint {
    pub const ALL: [Endpoint; 26] = [
        Endpoint::Movie,
        Endpoint::MovieById,
        Endpoint::MovieLookup,
        Endpoint::MovieLookupTmdb,
        Endpoint::MovieLookupImdb,
        Endpoint::Queue,
        Endpoint::QueueById,
        Endpoint::QueueDetails,
        Endpoint::QueueStatus,
        Endpoint::QueueBulk,
        Endpoint::History,
        Endpoint::HistorySince,
        Endpoint::HistoryMovie,
        Endpoint::HistoryFailed,
        Endpoint::Calendar,
        Endpoint::CalendarById,
        Endpoint::Command,
        Endpoint::CommandById,
        Endpoint::SystemStatus,
        Endpoint::Health,
        Endpoint::DiskSpace,
        Endpoint::SystemTask,
        Endpoint::SystemTaskById,
        Endpoint::SystemBackup,
        Endpoint::WantedMissing,
        Endpoint::WantedCutoff,
    ];

    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Movie => "movie",
            Endpoint::MovieById => "movie/{id}",
            Endpoint::MovieLookup => "movie/lookup",
            Endpoint::MovieLookupTmdb => "movie/lookup/tmdb",
            Endpoint::MovieLookupImdb => "movie/lookup/imdb",
            Endpoint::Queue => "queue",
            Endpoint::QueueById => "queue/{id}",
            Endpoint::QueueDetails => "queue/details",
            Endpoint::QueueStatus => "queue/status",
            Endpoint::QueueBulk => "queue/bulk",
            Endpoint::History => "history",
            Endpoint::HistorySince => "history/since",
            Endpoint::HistoryMovie => "history/movie",
            Endpoint::HistoryFailed => "history/failed/{id}",
            Endpoint::Calendar => "calendar",
            Endpoint::CalendarById => "calendar/{id}",
            Endpoint::Command => "command",
            Endpoint::CommandById => "command/{id}",
            Endpoint::SystemStatus => "system/status",
            Endpoint::Health => "health",
            Endpoint::DiskSpace => "diskspace",
            Endpoint::SystemTask => "system/task",
            Endpoint::SystemTaskById => "system/task/{id}",
            Endpoint::SystemBackup => "system/backup",
            Endpoint::WantedMissing => "wanted/missing",
            Endpoint::WantedCutoff => "wanted/cutoff",
        }
    }

    pub fn requires_id(&self) -> bool {
        self.template().contains(ID_PLACEHOLDER)
    }

    /// Response used when the server answers with an empty body or `null`
    pub fn default_response(&self) -> Value {
        match self {
            Endpoint::Queue
            | Endpoint::History
            | Endpoint::WantedMissing
            | Endpoint::WantedCutoff => empty_page(),
            Endpoint::QueueById | Endpoint::QueueBulk | Endpoint::HistoryFailed => Value::Null,
            Endpoint::MovieById
            | Endpoint::MovieLookupTmdb
            | Endpoint::MovieLookupImdb
            | Endpoint::QueueStatus
            | Endpoint::CalendarById
            | Endpoint::CommandById
            | Endpoint::SystemStatus
            | Endpoint::SystemTaskById => json!({}),
            Endpoint::Movie
            | Endpoint::MovieLookup
            | Endpoint::QueueDetails
            | Endpoint::HistorySince
            | Endpoint::HistoryMovie
            | Endpoint::Calendar
            | Endpoint::Command
            | Endpoint::Health
            | Endpoint::DiskSpace
            | Endpoint::SystemTask
            | Endpoint::SystemBackup => json!([]),
        }
    }

    /// Replace a missing (`null`) response with this endpoint's default
    pub fn or_default(&self, value: Value) -> Value {
        if value.is_null() {
            self.default_response()
        } else {
            value
        }
    }

    pub fn with_id(self, id: i64) -> Route {
        Route { endpoint: self, id: Some(id) }
    }
}

fn empty_page() -> Value {
    json!({
        "page": 1,
        "pageSize": 10,
        "totalRecords": 0,
        "records": [],
    })
}

/// An endpoint plus the id substituted into its `{id}` placeholder, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub endpoint: Endpoint,
    pub id: Option<i64>,
}

impl Route {
    pub fn path(&self) -> Result<String> {
        let template = self.endpoint.template();
        if !self.endpoint.requires_id() {
            return Ok(template.to_string());
        }
        let id = self.id.ok_or(RadarrError::MissingPathId { template })?;
        Ok(template.replace(ID_PLACEHOLDER, &id.to_string()))
    }
}

impl From<Endpoint> for Route {
    fn from(endpoint: Endpoint) -> Self {
        Route { endpoint, id: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_substitution() {
        assert_eq!(Endpoint::MovieById.with_id(42).path().unwrap(), "movie/42");
        assert_eq!(Endpoint::HistoryFailed.with_id(7).path().unwrap(), "history/failed/7");
        assert_eq!(Route::from(Endpoint::QueueStatus).path().unwrap(), "queue/status");
    }

    #[test]
    fn test_path_without_placeholder_ignores_id() {
        assert_eq!(Endpoint::Movie.with_id(3).path().unwrap(), "movie");
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let err = Route::from(Endpoint::CommandById).path().unwrap_err();
        assert!(matches!(err, RadarrError::MissingPathId { template: "command/{id}" }));
    }

    #[test]
    fn test_paginated_defaults() {
        for endpoint in [
            Endpoint::Queue,
            Endpoint::History,
            Endpoint::WantedMissing,
            Endpoint::WantedCutoff,
        ] {
            let value = endpoint.default_response();
            assert_eq!(value["page"], 1);
            assert_eq!(value["pageSize"], 10);
            assert_eq!(value["totalRecords"], 0);
            assert!(value["records"].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_every_endpoint_has_a_template() {
        for endpoint in Endpoint::ALL {
            assert!(!endpoint.template().is_empty());
            assert!(!endpoint.template().starts_with('/'));
        }
        let with_ids = Endpoint::ALL.iter().filter(|e| e.requires_id()).count();
        assert_eq!(with_ids, 6);
    }

    #[test]
    fn test_or_default() {
        assert_eq!(Endpoint::Movie.or_default(Value::Null), json!([]));
        assert_eq!(Endpoint::Movie.or_default(json!([{"id": 1}])), json!([{"id": 1}]));
    }
}
