//! In-memory [`RestClient`] and JSON factories for exercising code that talks
//! to Radarr without a server.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use crate::client::RestClient;
use crate::endpoint::Route;
use crate::error::{RadarrError, Result};
use crate::options::QueryParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub route: Route,
    pub params: QueryParams,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Body(Value),
    Status(u16, String),
}

/// Scripted responses are served first-in first-out per method and route.
/// Once a route runs out, the endpoint's default response is returned.
#[derive(Debug, Default)]
pub struct FakeRestClient {
    responses: Mutex<HashMap<(HttpMethod, Route), VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FakeRestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: HttpMethod, route: impl Into<Route>, body: Value) -> &Self {
        self.script(method, route.into(), Scripted::Body(body))
    }

    pub fn on_get(&self, route: impl Into<Route>, body: Value) -> &Self {
        self.respond(HttpMethod::Get, route, body)
    }

    pub fn on_post(&self, route: impl Into<Route>, body: Value) -> &Self {
        self.respond(HttpMethod::Post, route, body)
    }

    pub fn on_put(&self, route: impl Into<Route>, body: Value) -> &Self {
        self.respond(HttpMethod::Put, route, body)
    }

    /// Answer the next matching call with a non-success status
    pub fn fail(
        &self,
        method: HttpMethod,
        route: impl Into<Route>,
        status: u16,
        body: &str,
    ) -> &Self {
        self.script(method, route.into(), Scripted::Status(status, body.to_string()))
    }

    fn script(&self, method: HttpMethod, route: Route, response: Scripted) -> &Self {
        lock(&self.responses)
            .entry((method, route))
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn calls_to(&self, method: HttpMethod, route: impl Into<Route>) -> Vec<RecordedCall> {
        let route = route.into();
        lock(&self.calls)
            .iter()
            .filter(|call| call.method == method && call.route == route)
            .cloned()
            .collect()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }

    fn handle(
        &self,
        method: HttpMethod,
        route: Route,
        params: QueryParams,
        body: Option<Value>,
    ) -> Result<Value> {
        let path = route.path()?;
        lock(&self.calls).push(RecordedCall {
            method,
            route,
            params,
            body,
        });

        let scripted = lock(&self.responses)
            .get_mut(&(method, route))
            .and_then(VecDeque::pop_front);
        match scripted {
            Some(Scripted::Body(value)) => Ok(route.endpoint.or_default(value)),
            Some(Scripted::Status(status, body)) => Err(RadarrError::Status {
                status,
                url: format!("fake://radarr/api/v3/{}", path),
                body,
            }),
            None => Ok(route.endpoint.default_response()),
        }
    }
}

#[async_trait]
impl RestClient for FakeRestClient {
    async fn get(&self, route: Route, params: &QueryParams) -> Result<Value> {
        self.handle(HttpMethod::Get, route, params.clone(), None)
    }

    async fn post(&self, route: Route, body: &Value) -> Result<Value> {
        self.handle(HttpMethod::Post, route, QueryParams::new(), Some(body.clone()))
    }

    async fn put(&self, route: Route, body: &Value) -> Result<Value> {
        self.handle(HttpMethod::Put, route, QueryParams::new(), Some(body.clone()))
    }

    async fn delete(&self, route: Route, params: &QueryParams) -> Result<()> {
        self.handle(HttpMethod::Delete, route, params.clone(), None)?;
        Ok(())
    }

    async fn delete_with_body(
        &self,
        route: Route,
        params: &QueryParams,
        body: &Value,
    ) -> Result<()> {
        self.handle(HttpMethod::Delete, route, params.clone(), Some(body.clone()))?;
        Ok(())
    }
}

/// Radarr-shaped JSON payloads
pub mod factory {
    use super::*;

    /// A released, monitored movie with its file on disk
    pub fn movie(id: i64) -> Value {
        json!({
            "id": id,
            "title": format!("Movie {}", id),
            "sortTitle": format!("movie {}", id),
            "originalTitle": format!("Movie {}", id),
            "originalLanguage": {"id": 1, "name": "English"},
            "year": 2020,
            "tmdbId": 1000 + id,
            "imdbId": format!("tt{:07}", id),
            "status": "released",
            "overview": "",
            "monitored": true,
            "hasFile": true,
            "path": format!("/movies/Movie {}", id),
            "qualityProfileId": 1,
            "runtime": 120,
            "sizeOnDisk": 4_500_000_000u64,
            "isAvailable": true,
            "genres": ["Drama"],
            "images": [
                {
                    "coverType": "poster",
                    "url": format!("/MediaCover/{}/poster.jpg", id),
                    "remoteUrl": format!("https://image.tmdb.org/t/p/original/{}.jpg", id),
                },
            ],
        })
    }

    /// Monitored and released but without a file
    pub fn missing_movie(id: i64) -> Value {
        let mut movie = movie(id);
        movie["hasFile"] = json!(false);
        movie["sizeOnDisk"] = json!(0);
        movie
    }

    /// Half-downloaded 4.19 GB release, 90 minutes left
    pub fn queue_record(id: i64) -> Value {
        json!({
            "id": id,
            "movieId": id,
            "title": format!("Movie.{}.2020.1080p.BluRay", id),
            "status": "downloading",
            "trackedDownloadStatus": "ok",
            "trackedDownloadState": "downloading",
            "size": 4_500_000_000u64,
            "sizeleft": 2_250_000_000u64,
            "timeleft": "01:30:00",
            "downloadClient": "qBittorrent",
            "downloadId": format!("hash{}", id),
            "protocol": "torrent",
            "indexer": "Indexer",
            "outputPath": format!("/downloads/Movie.{}", id),
            "statusMessages": [],
        })
    }

    pub fn completed_queue_record(id: i64) -> Value {
        let mut record = queue_record(id);
        record["status"] = json!("completed");
        record["trackedDownloadState"] = json!("imported");
        record["sizeleft"] = json!(0);
        record["timeleft"] = json!("00:00:00");
        record
    }

    pub fn failed_queue_record(id: i64) -> Value {
        let mut record = queue_record(id);
        record["status"] = json!("failed");
        record["trackedDownloadStatus"] = json!("error");
        record["trackedDownloadState"] = json!("failedPending");
        record["errorMessage"] = json!("Download failed");
        record
    }

    pub fn history_record(id: i64, event_type: &str) -> Value {
        json!({
            "id": id,
            "movieId": id,
            "sourceTitle": format!("Movie.{}.2020.1080p.BluRay", id),
            "eventType": event_type,
            "date": "2024-03-01T10:00:00Z",
            "downloadId": format!("hash{}", id),
            "data": {"indexer": "Indexer"},
        })
    }

    pub fn system_status() -> Value {
        json!({
            "appName": "Radarr",
            "instanceName": "Radarr",
            "version": "5.2.6.8376",
            "startupPath": "/app/radarr/bin",
            "appData": "/config",
            "osName": "ubuntu",
            "osVersion": "22.04",
            "isDocker": true,
            "branch": "master",
            "authentication": "forms",
            "urlBase": "",
            "runtimeVersion": "6.0.13",
            "runtimeName": ".NET",
            "startTime": "2024-03-01T10:00:00Z",
        })
    }

    pub fn health_check(source: &str, check_type: &str, message: &str) -> Value {
        json!({
            "source": source,
            "type": check_type,
            "message": message,
            "wikiUrl": "https://wiki.servarr.com/radarr/system",
        })
    }

    pub fn page(page: u32, page_size: u32, total_records: usize, records: Vec<Value>) -> Value {
        json!({
            "page": page,
            "pageSize": page_size,
            "totalRecords": total_records,
            "records": records,
        })
    }
}
