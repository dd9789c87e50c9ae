use async_trait::async_trait;
use radarr_config::RadarrConfig;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::endpoint::{Endpoint, Route};
use crate::error::{RadarrError, Result};
use crate::options::QueryParams;

/// Transport used by every action module. Implementations resolve the route
/// against their base URL and hand back the decoded JSON body.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get(&self, route: Route, params: &QueryParams) -> Result<Value>;

    async fn post(&self, route: Route, body: &Value) -> Result<Value>;

    async fn put(&self, route: Route, body: &Value) -> Result<Value>;

    async fn delete(&self, route: Route, params: &QueryParams) -> Result<()>;

    /// DELETE carrying a JSON body, for bulk endpoints
    async fn delete_with_body(&self, route: Route, params: &QueryParams, body: &Value)
        -> Result<()>;
}

/// [`RestClient`] over HTTP(S) with reqwest
pub struct HttpRestClient {
    client: Client,
    base_url: String,
}

impl HttpRestClient {
    pub fn new(config: &RadarrConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                let mut api_key = reqwest::header::HeaderValue::from_str(&config.api_key)
                    .map_err(|_| {
                        RadarrError::Config("api key contains invalid characters".to_string())
                    })?;
                api_key.set_sensitive(true);
                headers.insert(reqwest::header::HeaderName::from_static("x-api-key"), api_key);
                headers
            })
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &Route) -> Result<String> {
        Ok(format!("{}/{}", self.base_url, route.path()?))
    }

    async fn send(
        &self,
        method: Method,
        route: Route,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Value> {
        let url = self.url(&route)?;
        let response = build(self.client.request(method.clone(), &url)).send().await?;
        let status = response.status();
        debug!("Radarr {} {} -> {}", method, url, status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(RadarrError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }
        decode_body(route.endpoint, &body)
    }
}

/// An empty body or `null` resolves to the endpoint's default response
fn decode_body(endpoint: Endpoint, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(endpoint.default_response());
    }
    let value: Value = serde_json::from_str(body)?;
    Ok(endpoint.or_default(value))
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn get(&self, route: Route, params: &QueryParams) -> Result<Value> {
        self.send(Method::GET, route, |request| request.query(params.pairs()))
            .await
    }

    async fn post(&self, route: Route, body: &Value) -> Result<Value> {
        self.send(Method::POST, route, |request| request.json(body)).await
    }

    async fn put(&self, route: Route, body: &Value) -> Result<Value> {
        self.send(Method::PUT, route, |request| request.json(body)).await
    }

    async fn delete(&self, route: Route, params: &QueryParams) -> Result<()> {
        self.send(Method::DELETE, route, |request| request.query(params.pairs()))
            .await?;
        Ok(())
    }

    async fn delete_with_body(
        &self,
        route: Route,
        params: &QueryParams,
        body: &Value,
    ) -> Result<()> {
        self.send(Method::DELETE, route, |request| request.query(params.pairs()).json(body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_building() {
        let mut config = RadarrConfig::new("radarr.lan", 7878, "key");
        config.url_base = "/radarr".to_string();
        let client = HttpRestClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://radarr.lan:7878/radarr/api/v3");
        assert_eq!(
            client.url(&Endpoint::MovieById.with_id(9)).unwrap(),
            "http://radarr.lan:7878/radarr/api/v3/movie/9"
        );
        assert!(client.url(&Endpoint::MovieById.into()).is_err());
    }

    #[test]
    fn test_invalid_api_key_is_a_config_error() {
        let config = RadarrConfig::new("localhost", 7878, "bad\nkey");
        assert!(matches!(HttpRestClient::new(&config), Err(RadarrError::Config(_))));
    }

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(decode_body(Endpoint::Movie, "").unwrap(), json!([]));
        assert_eq!(decode_body(Endpoint::SystemStatus, "  ").unwrap(), json!({}));
        assert_eq!(decode_body(Endpoint::Queue, "null").unwrap()["totalRecords"], 0);
        assert_eq!(decode_body(Endpoint::QueueById, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(Endpoint::MovieById, r#"{"id": 3}"#).unwrap(), json!({"id": 3}));
        assert!(matches!(decode_body(Endpoint::Movie, "<html>"), Err(RadarrError::Decode(_))));
    }
}
