//! HTTP client utilities and retry logic.
//!
//! This module provides the transport layer shared by every resource manager:
//! request signing, retry with exponential backoff, HTTP status mapping, and
//! the `data`/`meta` response envelopes the v4 API wraps every payload in.

use std::time::Duration;

use reqwest::header;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::RequestSigner;
use crate::config::ConstellixConfig;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("constellix-rust/", env!("CARGO_PKG_VERSION"));

/// Default maximum number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial retry delay in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Default maximum retry delay in milliseconds (for exponential backoff)
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5000;

/// Retry policy with exponential backoff.
///
/// Only failures classified as retryable ([`Error::is_retryable`]) are
/// retried: transport connect/timeout errors and the 429/5xx status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,

    /// Initial delay before first retry
    pub initial_delay: Duration,

    /// Maximum delay between retries (cap for exponential backoff)
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS),
        }
    }

    /// Create a retry policy with no retries.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(0),
        }
    }

    /// Set the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the initial delay.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Calculate delay for a given attempt number.
    ///
    /// Uses exponential backoff: `delay = min(initial_delay * 2^(attempt-1), max_delay)`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::from_secs(0);
        }

        let multiplier = 2u32.saturating_pow(attempt - 1);
        let delay_ms = (self.initial_delay.as_millis() as u64).saturating_mul(u64::from(multiplier));
        std::cmp::min(Duration::from_millis(delay_ms), self.max_delay)
    }

    /// Check if retries are enabled.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope wrapping a single resource in the `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEnvelope<T> {
    /// The wrapped resource
    pub data: T,
}

/// Envelope wrapping a list response in `data` plus pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    /// The page of resources
    pub data: Vec<T>,
    /// Metadata block, absent on some endpoints
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Metadata block of a list response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Pagination details
    #[serde(default)]
    pub pagination: Option<PageMeta>,
}

/// Pagination metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of items across all pages
    #[serde(default)]
    pub total: u64,
    /// Page number this response corresponds to
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Page size used for this response
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts a human-readable message from an API error body.
///
/// The API reports failures as `{"errors": [...]}` or `{"error": "..."}`;
/// anything else is passed through verbatim.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                return errors.join("; ");
            }
        }
        if let Some(error) = parsed.error {
            return error;
        }
    }
    body.to_string()
}

fn map_status_to_error(status: StatusCode, body: &str) -> Error {
    let message = error_message(body);
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::AuthenticationFailed(message),
        StatusCode::BAD_REQUEST => Error::BadRequest(message),
        StatusCode::UNPROCESSABLE_ENTITY => Error::ValidationRejected(message),
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            Error::ServiceUnavailable(format!("API temporarily unavailable: {message}"))
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("API server error {status}: {message}"))
        }
        status => Error::HttpError(format!("API error {status}: {message}")),
    }
}

/// Signed HTTP client for the Constellix v4 API.
///
/// Resource managers borrow this client and express their endpoints as paths
/// relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    signer: RequestSigner,
    retry: RetryPolicy,
}

impl RestClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &ConstellixConfig) -> Result<Self> {
        let retry = RetryPolicy::new().with_max_retries(config.max_retries);
        Self::with_retry_policy(config, retry)
    }

    /// Build a client with an explicit retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the underlying HTTP
    /// client cannot be constructed.
    pub fn with_retry_policy(config: &ConstellixConfig, retry: RetryPolicy) -> Result<Self> {
        let base_url = config.parse_base_url()?;
        let signer = RequestSigner::new(config.api_key.clone(), config.secret_key.clone());
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            signer,
            retry,
        })
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a single resource, unwrapping the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get_object<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send::<()>(Method::GET, path, &[], None).await?;
        Self::parse_object(path, response).await
    }

    /// Fetch one page of a list endpoint, returning the items and the
    /// pagination metadata.
    ///
    /// When the endpoint omits the metadata block, the item count of the
    /// returned page stands in for the total.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn get_list<T>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<(Vec<T>, PageMeta)>
    where
        T: DeserializeOwned,
    {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        let envelope: ListEnvelope<T> = response
            .json()
            .await
            .map_err(|e| Error::ParseFailed(format!("Failed to parse response for `{path}`: {e}")))?;

        let meta = envelope
            .meta
            .and_then(|meta| meta.pagination)
            .unwrap_or_else(|| PageMeta {
                total: envelope.data.len() as u64,
                ..PageMeta::default()
            });

        Ok((envelope.data, meta))
    }

    /// Create a resource, unwrapping the `data` envelope of the response.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn post_object<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, &[], Some(body)).await?;
        Self::parse_object(path, response).await
    }

    /// Update a resource, unwrapping the `data` envelope of the response.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn put_object<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, &[], Some(body)).await?;
        Self::parse_object(path, response).await
    }

    /// Delete a resource. The API answers with an empty 204 body.
    ///
    /// # Errors
    ///
    /// Returns the mapped API error on failure.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn parse_object<T>(path: &str, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let envelope: ObjectEnvelope<T> = response
            .json()
            .await
            .map_err(|e| Error::ParseFailed(format!("Failed to parse response for `{path}`: {e}")))?;
        Ok(envelope.data)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let mut attempt: u32 = 0;

        loop {
            let token = self.signer.bearer_token()?;
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header(header::AUTHORIZATION, token)
                .header(header::ACCEPT, "application/json");
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(payload) = body {
                request = request.json(payload);
            }

            tracing::debug!(%method, %url, attempt, "sending API request");

            let err = match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        tracing::debug!(%method, %url, %status, "API request succeeded");
                        return Ok(response);
                    }
                    let text = response.text().await.unwrap_or_default();
                    map_status_to_error(status, &text)
                }
                Err(err) => Error::from(err),
            };

            if err.is_retryable() && attempt < self.retry.max_retries {
                attempt += 1;
                let delay = self.retry.delay_for_attempt(attempt);
                tracing::warn!(%method, %url, attempt, ?delay, error = %err, "retrying API request");
                tokio::time::sleep(delay).await;
                continue;
            }

            return Err(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> RestClient {
        let config = ConstellixConfig::new("key", "secret")
            .unwrap()
            .with_base_url(server.uri());
        RestClient::with_retry_policy(
            &config,
            RetryPolicy::new()
                .with_max_retries(2)
                .with_initial_delay(Duration::from_millis(5))
                .with_max_delay(Duration::from_millis(10)),
        )
        .unwrap()
    }

    #[test]
    fn test_retry_policy_defaults() {
        let policy = RetryPolicy::new();
        assert_eq!(policy.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(
            policy.initial_delay,
            Duration::from_millis(DEFAULT_RETRY_DELAY_MS)
        );
        assert_eq!(
            policy.max_delay,
            Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS)
        );
        assert!(policy.has_retries());
        assert!(!RetryPolicy::no_retry().has_retries());
    }

    #[test]
    fn test_retry_policy_delay_calculation() {
        let policy = RetryPolicy::new();

        assert_eq!(policy.delay_for_attempt(0), Duration::from_secs(0));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(500));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(4000));
        // Capped at max_delay from here on.
        assert_eq!(policy.delay_for_attempt(5), Duration::from_millis(5000));
        assert_eq!(policy.delay_for_attempt(10), Duration::from_millis(5000));
    }

    #[test]
    fn test_page_meta_deserializes_camel_case() {
        let meta: PageMeta = serde_json::from_value(json!({
            "total": 45,
            "currentPage": 3,
            "perPage": 20,
            "totalPages": 3
        }))
        .unwrap();

        assert_eq!(meta.total, 45);
        assert_eq!(meta.current_page, Some(3));
        assert_eq!(meta.per_page, Some(20));
        assert_eq!(meta.total_pages, Some(3));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"errors": ["name is required", "bad ttl"]}"#),
            "name is required; bad ttl"
        );
        assert_eq!(error_message(r#"{"error": "boom"}"#), "boom");
        assert_eq!(error_message("plain text"), "plain text");
    }

    #[test]
    fn test_map_status_to_error() {
        assert!(matches!(
            map_status_to_error(StatusCode::NOT_FOUND, "missing"),
            Error::NotFound(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::UNAUTHORIZED, "denied"),
            Error::AuthenticationFailed(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::BAD_REQUEST, "bad"),
            Error::BadRequest(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid"),
            Error::ValidationRejected(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::SERVICE_UNAVAILABLE, "down"),
            Error::ServiceUnavailable(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            Error::ServiceUnavailable(_)
        ));
        assert!(matches!(
            map_status_to_error(StatusCode::IM_A_TEAPOT, "teapot"),
            Error::HttpError(_)
        ));
    }

    #[tokio::test]
    async fn get_object_unwraps_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/1"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": 1, "name": "example.com"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value: serde_json::Value = client.get_object("domains/1").await.unwrap();
        assert_eq!(value["name"], "example.com");
    }

    #[tokio::test]
    async fn get_object_maps_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"errors": ["Domain not found"]})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .get_object::<serde_json::Value>("domains/999")
            .await
            .unwrap_err();
        assert_eq!(err, Error::NotFound("Domain not found".to_string()));
    }

    #[tokio::test]
    async fn get_list_returns_items_and_meta() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .and(query_param("page", "2"))
            .and(query_param("perPage", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 21, "name": "a.com"}, {"id": 22, "name": "b.com"}],
                "meta": {"pagination": {"total": 45, "currentPage": 2, "perPage": 20, "totalPages": 3}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let query = crate::query::QueryParams::for_page(2, 20).into_pairs();
        let (items, meta) = client
            .get_list::<serde_json::Value>("domains", &query)
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(meta.total, 45);
        assert_eq!(meta.current_page, Some(2));
    }

    #[tokio::test]
    async fn get_list_without_meta_falls_back_to_page_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contactlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1}, {"id": 2}, {"id": 3}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let (items, meta) = client
            .get_list::<serde_json::Value>("contactlists", &[])
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(meta.total, 3);
    }

    #[tokio::test]
    async fn retryable_failure_is_retried_until_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/1"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/domains/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value: serde_json::Value = client.get_object("domains/1").await.unwrap();
        assert_eq!(value["id"], 1);
    }

    #[tokio::test]
    async fn non_retryable_failure_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/1"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .get_object::<serde_json::Value>("domains/1")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/domains/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete("domains/1").await.unwrap();
    }
}
