//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`http_mock::MockHttpServer`] - Declarative HTTP stubbing for outbound
//!   upstream calls
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_upstream_call() {
//!     let server = MockHttpServer::start().await;
//!     server
//!         .expect_get("/zxhl2/basin/dict")
//!         .respond_with_json(json!({"basins": []}))
//!         .mount()
//!         .await;
//!     // Point an HttpUpstreamClient at server.url()...
//! }
//! ```

pub mod http_mock;
