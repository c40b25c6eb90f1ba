//! Upstream basin/hydrology service clients.
//!
//! The canned data service covers most of the dashboard, but a few panels
//! talk to real services. This module wraps those calls behind
//! [`UpstreamClient`] with bearer-token attachment, a fixed request
//! timeout, and unwrap-on-200 response handling.
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! Use `MockUpstreamClient` for fast, isolated unit tests:
//!
//! ```ignore
//! use floodwatch_api::upstream::mock::MockUpstreamClient;
//!
//! let mock = MockUpstreamClient::new();
//! mock.set_basin_dict_result(Ok(serde_json::json!({"basins": []})));
//! // Pass the mock to code under test.
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use the `MockHttpServer` helper to test `HttpUpstreamClient` against
//! stubbed HTTP:
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//! server
//!     .expect_get("/zxhl2/basin/dict")
//!     .with_header("Authorization", "Bearer abc")
//!     .respond_with_json(json!({"basins": ["韩江"]}))
//!     .mount()
//!     .await;
//!
//! let client = HttpUpstreamClient::new(server.url(), Some("abc".into()))?;
//! let dict = client.basin_dict().await?;
//! ```

mod client;

pub use client::{
    FloodRiskQuery, HttpUpstreamClient, UpstreamClient, UpstreamError, DEFAULT_TIMEOUT,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
