//! REST API handlers and `OpenAPI` documentation.
//!
//! The dashboard consumes these endpoints directly. Canned-data routes have
//! no failure path by contract; only the upstream proxy routes can reject,
//! with an RFC 7807 body.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::upstream::{FloodRiskQuery, UpstreamClient, UpstreamError};
use crate::warning::{
    ElementKind, ElementRecord, ElementStat, FloodAreaRecord, FloodDataService, GateRecord,
    LayerConfig, Page, PumpRecord, ReservoirRecord, RiskLevelStat, RiskTier, RiverRecord,
    StationRecord,
};

/// Serialize a `StatusCode` as its `u16` representation.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires `&T` signature
fn serialize_status_code<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

/// RFC 7807 Problem Details error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary
    pub title: String,
    /// HTTP status code
    #[serde(serialize_with = "serialize_status_code")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
}

impl ProblemDetails {
    /// Create an internal server error response.
    #[must_use]
    pub fn internal_error(detail: &str) -> Self {
        Self {
            problem_type: "https://floodwatch.dev/errors/internal".to_string(),
            title: "Internal Server Error".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.to_string(),
        }
    }

    /// Create a bad gateway response for a failed upstream call.
    #[must_use]
    pub fn bad_gateway(detail: &str) -> Self {
        Self {
            problem_type: "https://floodwatch.dev/errors/upstream".to_string(),
            title: "Bad Gateway".to_string(),
            status: StatusCode::BAD_GATEWAY,
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<UpstreamError> for ProblemDetails {
    fn from(error: UpstreamError) -> Self {
        // The error was already logged at the client boundary.
        Self::bad_gateway(&error.to_string())
    }
}

/// Query parameters for the element list endpoint.
///
/// Every field is optional on the wire; defaults match the dashboard's
/// initial list view.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementListParams {
    /// Element kind tag; unrecognized tags fall back to `river`.
    pub kind: String,
    /// 1-based page number.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
    /// Case-sensitive substring to match against record names.
    pub keyword: String,
}

impl Default for ElementListParams {
    fn default() -> Self {
        Self {
            kind: "river".to_string(),
            page: 1,
            page_size: 10,
            keyword: String::new(),
        }
    }
}

/// Query parameters for the upstream file lookup proxy.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FileSelectParams {
    /// Path on the file service.
    #[serde(default)]
    pub path: String,
}

/// `OpenAPI` documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Floodwatch API",
        version = "1.0.0",
        description = "REST API for the flood-warning situational dashboard",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Dashboard API")
    ),
    paths(
        element_stats,
        element_list,
        river_detail,
        station_detail,
        risk_statistics,
        layer_configs,
        basin_dict,
        flood_risk_select,
        file_select
    ),
    components(schemas(
        ElementKind,
        ElementStat,
        ElementRecord,
        RiverRecord,
        PumpRecord,
        ReservoirRecord,
        GateRecord,
        StationRecord,
        FloodAreaRecord,
        RiskTier,
        RiskLevelStat,
        LayerConfig,
        Page<ElementRecord>,
        ProblemDetails
    ))
)]
pub struct ApiDoc;

/// Get per-kind element counters
#[utoipa::path(
    get,
    path = "/api/v1/element-stats",
    tag = "Elements",
    responses(
        (status = 200, description = "Element counters for the summary bar", body = Vec<ElementStat>)
    )
)]
pub async fn element_stats(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
) -> Json<Vec<ElementStat>> {
    Json(service.element_stats().await)
}

/// List elements of one kind, filtered and paginated
#[utoipa::path(
    get,
    path = "/api/v1/elements",
    tag = "Elements",
    params(ElementListParams),
    responses(
        (status = 200, description = "One page of the filtered dataset", body = Page<ElementRecord>)
    )
)]
pub async fn element_list(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
    Query(params): Query<ElementListParams>,
) -> Json<Page<ElementRecord>> {
    let kind = ElementKind::from_param(&params.kind);
    let page = service
        .element_list(kind, params.page, params.page_size, &params.keyword)
        .await;
    Json(page)
}

/// Get the detail record for one river
#[utoipa::path(
    get,
    path = "/api/v1/rivers/{id}",
    tag = "Elements",
    params(("id" = u32, Path, description = "River id; unknown ids resolve to the default record")),
    responses(
        (status = 200, description = "River detail with survey metadata", body = RiverRecord)
    )
)]
pub async fn river_detail(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
    Path(id): Path<u32>,
) -> Json<RiverRecord> {
    Json(service.river_detail(id).await)
}

/// Get the detail record for one gauging station
#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}",
    tag = "Elements",
    params(("id" = u32, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station detail", body = StationRecord)
    )
)]
pub async fn station_detail(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
    Path(id): Path<u32>,
) -> Json<StationRecord> {
    Json(service.station_detail(id).await)
}

/// Get the three-tier risk breakdown
#[utoipa::path(
    get,
    path = "/api/v1/risk-statistics",
    tag = "Risk",
    responses(
        (status = 200, description = "Severity tiers with display colors", body = Vec<RiskLevelStat>)
    )
)]
pub async fn risk_statistics(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
) -> Json<Vec<RiskLevelStat>> {
    Json(service.risk_statistics().await)
}

/// Get the map overlay configuration
#[utoipa::path(
    get,
    path = "/api/v1/layer-configs",
    tag = "Map",
    responses(
        (status = 200, description = "WMS overlay descriptors", body = Vec<LayerConfig>)
    )
)]
pub async fn layer_configs(
    Extension(service): Extension<Arc<dyn FloodDataService>>,
) -> Json<Vec<LayerConfig>> {
    Json(service.layer_configs().await)
}

/// Fetch the basin dictionary from the upstream gateway
///
/// # Errors
///
/// Returns `ProblemDetails` (502) when the upstream call fails.
#[utoipa::path(
    get,
    path = "/api/v1/upstream/basin-dict",
    tag = "Upstream",
    responses(
        (status = 200, description = "Basin dictionary as returned upstream", body = Object),
        (status = 502, description = "Upstream call failed", body = ProblemDetails)
    )
)]
pub async fn basin_dict(
    Extension(upstream): Extension<Arc<dyn UpstreamClient>>,
) -> Result<Json<Value>, ProblemDetails> {
    Ok(Json(upstream.basin_dict().await?))
}

/// Run a flood-risk selection query against the upstream gateway
///
/// # Errors
///
/// Returns `ProblemDetails` (502) when the upstream call fails.
#[utoipa::path(
    post,
    path = "/api/v1/upstream/flood-risk",
    tag = "Upstream",
    params(FloodRiskQuery),
    responses(
        (status = 200, description = "Selection result as returned upstream", body = Object),
        (status = 502, description = "Upstream call failed", body = ProblemDetails)
    )
)]
pub async fn flood_risk_select(
    Extension(upstream): Extension<Arc<dyn UpstreamClient>>,
    Query(query): Query<FloodRiskQuery>,
) -> Result<Json<Value>, ProblemDetails> {
    Ok(Json(upstream.flood_risk_select(&query).await?))
}

/// Look up files on the upstream file service
///
/// # Errors
///
/// Returns `ProblemDetails` (502) when the upstream call fails.
#[utoipa::path(
    get,
    path = "/api/v1/upstream/files",
    tag = "Upstream",
    params(FileSelectParams),
    responses(
        (status = 200, description = "File listing as returned upstream", body = Object),
        (status = 502, description = "Upstream call failed", body = ProblemDetails)
    )
)]
pub async fn file_select(
    Extension(upstream): Extension<Arc<dyn UpstreamClient>>,
    Query(params): Query<FileSelectParams>,
) -> Result<Json<Value>, ProblemDetails> {
    Ok(Json(upstream.file_select(&params.path).await?))
}

/// Liveness probe.
#[allow(clippy::unused_async)] // Required for Axum handler signature
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Assemble the application router.
///
/// The upstream proxy routes are mounted only when a gateway is configured;
/// without one the dashboard runs entirely on canned data.
pub fn router(
    service: Arc<dyn FloodDataService>,
    upstream: Option<Arc<dyn UpstreamClient>>,
) -> Router {
    let mut app = Router::new()
        .route("/api/v1/element-stats", get(element_stats))
        .route("/api/v1/elements", get(element_list))
        .route("/api/v1/rivers/{id}", get(river_detail))
        .route("/api/v1/stations/{id}", get(station_detail))
        .route("/api/v1/risk-statistics", get(risk_statistics))
        .route("/api/v1/layer-configs", get(layer_configs))
        .route("/health", get(health_check))
        .layer(Extension(service));

    if let Some(upstream) = upstream {
        app = app.merge(
            Router::new()
                .route("/api/v1/upstream/basin-dict", get(basin_dict))
                .route("/api/v1/upstream/flood-risk", post(flood_risk_select))
                .route("/api/v1/upstream/files", get(file_select))
                .layer(Extension(upstream)),
        );
    }

    app.layer(TraceLayer::new_for_http())
}
