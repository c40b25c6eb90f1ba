//! HTTP client for the upstream basin/hydrology services.
//!
//! This module provides a trait-based client for the real (non-canned)
//! endpoints the dashboard consumes. The trait abstraction enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with a stub server in integration tests
//! - Swapping implementations (e.g., a different upstream provider)
//!
//! Failure handling is deliberately flat: a call either fails in transport
//! (including the fixed timeout) or comes back with a non-200 status. Both
//! are logged once here and propagated; there are no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default timeout applied to every upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when calling an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure, including the request timing out
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-200 status
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },
}

/// Query parameters for the flood-risk selection endpoint.
///
/// Sent as query-string parameters even on POST, matching the upstream
/// service's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::IntoParams)]
pub struct FloodRiskQuery {
    /// Risk category filter, optional.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub risk_type: Option<String>,
    /// Region code filter, optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Trait for upstream basin/hydrology operations.
///
/// Use [`HttpUpstreamClient`] for real HTTP calls, or the [`mock`] module
/// implementation in tests.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetch the basin dictionary.
    async fn basin_dict(&self) -> Result<Value, UpstreamError>;

    /// Run a flood-risk selection query.
    async fn flood_risk_select(&self, query: &FloodRiskQuery) -> Result<Value, UpstreamError>;

    /// Look up files under a path on the file service.
    async fn file_select(&self, path: &str) -> Result<Value, UpstreamError>;
}

/// HTTP-based implementation of [`UpstreamClient`].
pub struct HttpUpstreamClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpUpstreamClient {
    /// Create a client with the given base URL and optional bearer token,
    /// applying [`DEFAULT_TIMEOUT`] to every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: Option<String>,
    ) -> Result<Self, UpstreamError> {
        Self::with_timeout(base_url, bearer_token, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, bearer_token))
    }

    /// Create a client with a custom `reqwest::Client` (for testing with a
    /// different timeout or connector).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        bearer_token: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            bearer_token,
        }
    }

    /// Attach the configured bearer token, if any. Requests go out with
    /// untouched headers when no token is configured.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and unwrap the JSON body on status 200.
    ///
    /// Anything other than 200 rejects with the status and raw body, logged
    /// once here so callers don't have to.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, UpstreamError> {
        let response = self.authorize(request).send().await.map_err(|error| {
            tracing::error!(%error, "upstream request failed");
            UpstreamError::from(error)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "upstream returned non-200 status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn basin_dict(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/zxhl2/basin/dict", self.base_url);
        self.execute(self.client.get(url)).await
    }

    async fn flood_risk_select(&self, query: &FloodRiskQuery) -> Result<Value, UpstreamError> {
        let url = format!("{}/api/hsfx/select", self.base_url);
        self.execute(self.client.post(url).query(query)).await
    }

    async fn file_select(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/api3/file/select", self.base_url);
        self.execute(self.client.get(url).query(&[("path", path)]))
            .await
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{FloodRiskQuery, UpstreamClient, UpstreamError};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Mock implementation of [`UpstreamClient`] for unit tests.
    ///
    /// Configure responses with the `set_*_result` methods and verify calls
    /// with the `*_calls` accessors. Unconfigured operations resolve to an
    /// empty JSON object.
    pub struct MockUpstreamClient {
        basin_dict_result: Mutex<Option<Result<Value, UpstreamError>>>,
        flood_risk_result: Mutex<Option<Result<Value, UpstreamError>>>,
        file_select_result: Mutex<Option<Result<Value, UpstreamError>>>,
        flood_risk_calls: Mutex<Vec<FloodRiskQuery>>,
        file_select_calls: Mutex<Vec<String>>,
    }

    impl MockUpstreamClient {
        pub fn new() -> Self {
            Self {
                basin_dict_result: Mutex::new(None),
                flood_risk_result: Mutex::new(None),
                file_select_result: Mutex::new(None),
                flood_risk_calls: Mutex::new(Vec::new()),
                file_select_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `basin_dict` call.
        pub fn set_basin_dict_result(&self, result: Result<Value, UpstreamError>) {
            *self.basin_dict_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `flood_risk_select` call.
        pub fn set_flood_risk_result(&self, result: Result<Value, UpstreamError>) {
            *self.flood_risk_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `file_select` call.
        pub fn set_file_select_result(&self, result: Result<Value, UpstreamError>) {
            *self.file_select_result.lock().unwrap() = Some(result);
        }

        /// Queries passed to `flood_risk_select`.
        pub fn flood_risk_calls(&self) -> Vec<FloodRiskQuery> {
            self.flood_risk_calls.lock().unwrap().clone()
        }

        /// Paths passed to `file_select`.
        pub fn file_select_calls(&self) -> Vec<String> {
            self.file_select_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockUpstreamClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl UpstreamClient for MockUpstreamClient {
        async fn basin_dict(&self) -> Result<Value, UpstreamError> {
            self.basin_dict_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Value::Object(serde_json::Map::new())))
        }

        async fn flood_risk_select(
            &self,
            query: &FloodRiskQuery,
        ) -> Result<Value, UpstreamError> {
            self.flood_risk_calls.lock().unwrap().push(query.clone());

            self.flood_risk_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Value::Object(serde_json::Map::new())))
        }

        async fn file_select(&self, path: &str) -> Result<Value, UpstreamError> {
            self.file_select_calls.lock().unwrap().push(path.to_string());

            self.file_select_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Value::Object(serde_json::Map::new())))
        }
    }
}
