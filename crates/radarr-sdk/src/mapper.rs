//! Translation from Radarr responses to the cross-service models in `arr-models`.

use arr_models::{
    DownloadItem, DownloadItemCollection, DownloadStatus, FileSize, HealthIssue, MediaStatus,
    Progress, Service, SystemSummary,
};
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::error::{RadarrError, Result};
use crate::responses::{HealthCheck, Movie, MovieCollection, QueuePage, QueueRecord, SystemStatus};

/// Parse a .NET style timespan, `hh:mm:ss` or `d.hh:mm:ss`, into a duration.
///
/// Empty input means "no duration" and yields `None`. A time part that does not
/// split into exactly three fields contributes nothing, so malformed input
/// yields whatever the day count added. Fractional seconds are dropped.
pub fn parse_timespan(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let first_colon = value.find(':').unwrap_or(value.len());
    let (days, time) = match value[..first_colon].find('.') {
        Some(dot) => (leading_int(&value[..dot]), &value[dot + 1..]),
        None => (0, value),
    };

    let mut seconds = days.saturating_mul(86_400);
    let parts: Vec<&str> = time.split(':').collect();
    if let [hours, minutes, secs] = parts.as_slice() {
        seconds = seconds
            .saturating_add(leading_int(hours).saturating_mul(3_600))
            .saturating_add(leading_int(minutes).saturating_mul(60))
            .saturating_add(leading_int(secs));
    }
    Some(Duration::from_secs(seconds))
}

/// Integer value of the leading digits, 0 when there are none and `u64::MAX`
/// when they overflow
fn leading_int(value: &str) -> u64 {
    let digits: String = value.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

pub fn normalize_media_status(status: &str, has_file: bool) -> Result<MediaStatus> {
    let normalized = match status {
        "tba" | "announced" => MediaStatus::Announced,
        "inCinemas" => MediaStatus::InCinemas,
        "released" => MediaStatus::Missing,
        "deleted" => MediaStatus::Deleted,
        "unknown" => MediaStatus::Unknown,
        other => {
            return Err(RadarrError::UnmappedStatus {
                field: "status",
                value: other.to_string(),
            })
        }
    };
    if has_file {
        return Ok(MediaStatus::Downloaded);
    }
    Ok(normalized)
}

const QUEUE_STATUSES: &[&str] = &[
    "unknown",
    "queued",
    "paused",
    "downloading",
    "completed",
    "failed",
    "warning",
    "delay",
    "downloadClientUnavailable",
    "fallback",
];

const TRACKED_STATUSES: &[&str] = &["ok", "warning", "error", "unknown"];

const TRACKED_STATES: &[&str] = &[
    "downloading",
    "importBlocked",
    "importPending",
    "importing",
    "imported",
    "failedPending",
    "failed",
    "ignored",
    "unknown",
];

fn check_vocabulary(field: &'static str, value: &str, known: &[&str]) -> Result<()> {
    if known.contains(&value) {
        Ok(())
    } else {
        Err(RadarrError::UnmappedStatus {
            field,
            value: value.to_string(),
        })
    }
}

/// Collapse a queue entry's status, tracked status and tracked state into one
/// download status. Tracked status errors win, then the import state, then
/// tracked warnings, then the client-side status.
pub fn normalize_download_status(
    status: &str,
    tracked_status: &str,
    tracked_state: &str,
) -> Result<DownloadStatus> {
    check_vocabulary("status", status, QUEUE_STATUSES)?;
    check_vocabulary("trackedDownloadStatus", tracked_status, TRACKED_STATUSES)?;
    check_vocabulary("trackedDownloadState", tracked_state, TRACKED_STATES)?;

    if tracked_status == "error" {
        return Ok(DownloadStatus::Failed);
    }
    match tracked_state {
        "imported" => return Ok(DownloadStatus::Completed),
        "importPending" | "importing" | "importBlocked" => return Ok(DownloadStatus::Importing),
        "failedPending" | "failed" => return Ok(DownloadStatus::Failed),
        "ignored" => return Ok(DownloadStatus::Unknown),
        _ => {}
    }
    if tracked_status == "warning" {
        return Ok(DownloadStatus::Warning);
    }

    Ok(match status {
        "queued" | "delay" => DownloadStatus::Queued,
        "paused" => DownloadStatus::Paused,
        "downloading" => DownloadStatus::Downloading,
        "completed" => DownloadStatus::Importing,
        "failed" => DownloadStatus::Failed,
        "warning" | "downloadClientUnavailable" | "fallback" => DownloadStatus::Warning,
        _ => DownloadStatus::Unknown,
    })
}

/// Poster, fanart and other artwork, preferring the remote URL
pub fn extract_image(movie: &Movie, cover_type: &str) -> Option<String> {
    let image = movie.image(cover_type)?;
    match image.remote_url.as_deref() {
        Some(remote) if !remote.is_empty() => Some(remote.to_string()),
        _ if !image.url.is_empty() => Some(image.url.clone()),
        _ => None,
    }
}

pub fn map_movie(movie: &Movie) -> Result<arr_models::Movie> {
    Ok(arr_models::Movie {
        id: movie.id,
        title: movie.title.clone(),
        year: movie.year.filter(|year| *year > 0),
        status: normalize_media_status(&movie.status, movie.has_file)?,
        monitored: movie.monitored,
        source: Service::Radarr,
        size_on_disk: FileSize::from_bytes(movie.size_on_disk),
        path: movie.path.clone(),
        overview: movie.overview.clone(),
        poster_url: extract_image(movie, "poster"),
        fanart_url: extract_image(movie, "fanart"),
        imdb_id: movie.imdb_id.clone().filter(|id| !id.is_empty()),
        tmdb_id: movie.tmdb_id.filter(|id| *id > 0),
        runtime: movie
            .runtime
            .filter(|minutes| *minutes > 0)
            .map(|minutes| Duration::from_secs(u64::from(minutes) * 60)),
        has_file: movie.has_file,
    })
}

pub fn map_movie_collection(movies: &MovieCollection) -> Result<Vec<arr_models::Movie>> {
    movies.iter().map(map_movie).collect()
}

pub fn map_queue_record(record: &QueueRecord) -> Result<DownloadItem> {
    let status = normalize_download_status(
        &record.status,
        &record.tracked_download_status,
        &record.tracked_download_state,
    )?;

    Ok(DownloadItem {
        id: record.id,
        name: record
            .title
            .clone()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        size: FileSize::from_bytes(record.size.max(0.0) as u64),
        size_remaining: FileSize::from_bytes(record.size_left.max(0.0) as u64),
        progress: Progress::from_sizes(record.size, record.size_left),
        status,
        source: Service::Radarr,
        eta: record.eta(),
        download_client: record.download_client.clone(),
        indexer: record.indexer.clone(),
        output_path: record.output_path.clone(),
        media_id: record.movie_id,
        media_title: record.movie.as_ref().map(|movie| movie.title.clone()),
        error_message: record.error_message.clone(),
    })
}

pub fn map_queue_page(page: &QueuePage) -> Result<DownloadItemCollection> {
    page.iter().map(map_queue_record).collect()
}

pub fn map_health_check(check: &HealthCheck) -> HealthIssue {
    HealthIssue {
        issue_type: check.check_type.clone(),
        message: check.message.clone(),
        source: check.source.clone(),
        wiki_url: check.wiki_url.clone(),
    }
}

/// Healthy means Radarr reported no health checks at all
pub fn map_system_summary(status: &SystemStatus, health: &[HealthCheck]) -> SystemSummary {
    SystemSummary {
        source: Service::Radarr,
        version: status.version.clone(),
        is_healthy: health.is_empty(),
        start_time: status
            .start_time
            .as_deref()
            .and_then(|time| DateTime::parse_from_rfc3339(time).ok())
            .map(|time| time.with_timezone(&Utc)),
        branch: status.branch.clone(),
        runtime_version: status.runtime_version.clone(),
        os_name: status.os_name.clone(),
        health_issues: health.iter().map(map_health_check).collect(),
    }
}
