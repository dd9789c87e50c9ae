//! Typed client for the Radarr v3 REST API.
//!
//! [`Radarr`] is the entry point. It exposes one action module per API resource
//! (movies, queue, history, calendar, commands, system, wanted) and a few
//! high-level calls that return the cross-service models from `arr-models`.

pub mod actions;
pub mod client;
pub mod endpoint;
pub mod enums;
pub mod error;
pub mod mapper;
pub mod options;
pub mod pagination;
pub mod radarr;
pub mod responses;
pub mod testing;
pub mod traits;

pub use actions::{
    CalendarActions, CommandActions, HistoryActions, MovieActions, QueueActions, SystemActions,
    WantedActions,
};
pub use client::{HttpRestClient, RestClient};
pub use endpoint::{Endpoint, Route};
pub use enums::{CommandName, HistoryEventType, MovieStatus, SortDirection};
pub use error::{RadarrError, Result};
pub use options::{
    CalendarOptions, HistoryOptions, PaginationOptions, QueryParams, QueueOptions, RequestOptions,
    SortOptions, WantedOptions,
};
pub use radarr::Radarr;
pub use responses::{
    Backup, Command, DiskSpace, HealthCheck, HistoryPage, HistoryRecord, Movie, MovieCollection,
    Page, QueuePage, QueueRecord, QueueStatus, ScheduledTask, SystemStatus,
};
pub use traits::MediaService;
