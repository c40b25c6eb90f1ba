//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock upstream API responses in integration
//! tests.
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` to assert call count

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A running stub HTTP server.
pub struct MockHttpServer {
    inner: MockServer,
}

impl MockHttpServer {
    /// Start a stub server on a random local port.
    pub async fn start() -> Self {
        Self {
            inner: MockServer::start().await,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        self.inner.uri()
    }

    /// The underlying `wiremock` server, for matchers this wrapper does not
    /// cover (query params, bodies).
    pub fn inner(&self) -> &MockServer {
        &self.inner
    }

    /// Stub a GET request to `request_path`.
    pub fn expect_get(&self, request_path: &str) -> StubBuilder<'_> {
        self.expect("GET", request_path)
    }

    /// Stub a POST request to `request_path`.
    pub fn expect_post(&self, request_path: &str) -> StubBuilder<'_> {
        self.expect("POST", request_path)
    }

    fn expect(&self, http_method: &str, request_path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.inner,
            method: http_method.to_string(),
            path: request_path.to_string(),
            headers: Vec::new(),
            status: 200,
            json_body: None,
            delay: None,
            times: None,
        }
    }

    /// Assert that all mounted expectations were satisfied.
    pub async fn verify(&self) {
        self.inner.verify().await;
    }

    /// Requests the server has received so far.
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.inner.received_requests().await.unwrap_or_default()
    }
}

/// Declarative builder for one stubbed response.
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    status: u16,
    json_body: Option<Value>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    /// Only match requests carrying this header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Respond with this status code (default 200).
    #[must_use]
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Respond with this JSON body.
    #[must_use]
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.json_body = Some(body);
        self
    }

    /// Delay the response, for timeout tests.
    #[must_use]
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Expect exactly this many matching calls (checked by `verify`).
    #[must_use]
    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    /// Mount the stub on the server.
    pub async fn mount(self) {
        let mut mock = Mock::given(method(self.method.as_str())).and(path(self.path.as_str()));
        for (name, value) in &self.headers {
            mock = mock.and(header(name.as_str(), value.as_str()));
        }

        let mut response = ResponseTemplate::new(self.status);
        if let Some(body) = self.json_body {
            response = response.set_body_json(body);
        }
        if let Some(delay) = self.delay {
            response = response.set_delay(delay);
        }

        let mut mounted = mock.respond_with(response);
        if let Some(times) = self.times {
            mounted = mounted.expect(times);
        }

        mounted.mount(self.server).await;
    }
}
