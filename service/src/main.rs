#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::{net::SocketAddr, sync::Arc};

use axum::http::{HeaderValue, Method};
use floodwatch_api::{
    config::Config,
    rest,
    upstream::{HttpUpstreamClient, UpstreamClient},
    warning::{CannedFloodData, FloodDataService, Latency},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load and validate configuration first (fail-fast)
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    // Init banner so container logs clearly show startup
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "floodwatch-api starting up"
    );

    // Canned data service; latency simulation can be switched off for
    // local development
    let latency = if config.mock.simulate_latency {
        Latency::realistic()
    } else {
        tracing::info!("latency simulation disabled");
        Latency::none()
    };
    let service: Arc<dyn FloodDataService> =
        Arc::new(CannedFloodData::new(latency, config.map_service.clone()));

    // Upstream gateway client, only when configured
    let upstream: Option<Arc<dyn UpstreamClient>> = if config.upstream.enabled() {
        tracing::info!(base_url = %config.upstream.base_url, "upstream gateway configured");
        let client = HttpUpstreamClient::with_timeout(
            config.upstream.base_url.clone(),
            config.upstream.bearer_token.clone(),
            config.upstream.timeout(),
        )
        .map_err(|e| anyhow::anyhow!("{e}"))?;
        Some(Arc::new(client))
    } else {
        tracing::info!("no upstream gateway configured - proxy routes disabled");
        None
    };

    // Build CORS layer from config
    let cors_origins = &config.cors.allowed_origins;
    let allow_origin: AllowOrigin = if cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow any origin - not recommended for production");
        AllowOrigin::any()
    } else if cors_origins.is_empty() {
        tracing::info!(
            "CORS allowed origins not configured - cross-origin requests will be blocked"
        );
        AllowOrigin::list(Vec::<HeaderValue>::new())
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        tracing::info!(origins = ?cors_origins, "CORS allowed origins configured");
        AllowOrigin::list(origins)
    };

    let app = rest::router(service, upstream).layer(
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .allow_origin(allow_origin),
    );

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Starting server at http://{}/api/v1", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
