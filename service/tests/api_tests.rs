//! REST surface tests driven through the router in-process.
//!
//! These tests mirror how the dashboard consumes the API: plain GETs with
//! query parameters, JSON bodies asserted structurally. The canned service
//! runs with zero latency so the suite stays fast and deterministic.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use floodwatch_api::config::MapServiceConfig;
use floodwatch_api::rest;
use floodwatch_api::upstream::{mock::MockUpstreamClient, UpstreamClient, UpstreamError};
use floodwatch_api::warning::{CannedFloodData, FloodDataService, Latency};

/// Router wired like main.rs, minus latency and the CORS layer.
fn test_router(upstream: Option<Arc<dyn UpstreamClient>>) -> Router {
    let service: Arc<dyn FloodDataService> = Arc::new(CannedFloodData::new(
        Latency::none(),
        MapServiceConfig::default(),
    ));
    rest::router(service, upstream)
}

/// Execute a GET and parse the JSON response.
async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let json: Value = serde_json::from_slice(&body_bytes).expect("Response should be valid JSON");

    (status, json)
}

#[tokio::test]
async fn health_check_returns_ok() {
    let response = test_router(None)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn element_stats_returns_five_counters() {
    let (status, json) = get_json(test_router(None), "/api/v1/element-stats").await;

    assert_eq!(status, StatusCode::OK);
    let stats = json.as_array().expect("array body");
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[0]["type"], "river");
    assert_eq!(stats[0]["label"], "河流");
    assert_eq!(stats[0]["count"], 30);
    assert_eq!(stats[4]["type"], "flood");
    assert_eq!(stats[4]["count"], 5);
}

#[tokio::test]
async fn elements_default_to_first_river_page() {
    let (status, json) = get_json(test_router(None), "/api/v1/elements").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 12);
    let data = json["data"].as_array().expect("data array");
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["name"], "水东河");
    assert_eq!(data[0]["slope"], "0.2");
}

#[tokio::test]
async fn elements_select_dataset_by_kind() {
    let cases = [
        ("river", 12, "水东河"),
        ("pump", 5, "梅江泵站"),
        ("reservoir", 4, "梅江水库"),
        ("gate", 4, "梅江水闸"),
        ("flood", 5, "梅江新区易涝区"),
    ];

    for (kind, total, first_name) in cases {
        let (status, json) =
            get_json(test_router(None), &format!("/api/v1/elements?kind={kind}")).await;

        assert_eq!(status, StatusCode::OK, "kind {kind}");
        assert_eq!(json["total"], total, "kind {kind}");
        assert_eq!(json["data"][0]["name"], first_name, "kind {kind}");
    }
}

#[tokio::test]
async fn unknown_kind_falls_back_to_rivers() {
    let (status, json) = get_json(test_router(None), "/api/v1/elements?kind=canal").await;

    assert_eq!(status, StatusCode::OK);
    // Same response the river dataset gives, not an error.
    assert_eq!(json["total"], 12);
    assert_eq!(json["data"][0]["name"], "水东河");
}

#[tokio::test]
async fn elements_paginate_with_camel_case_params() {
    let (status, json) =
        get_json(test_router(None), "/api/v1/elements?page=2&pageSize=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 12);
    let ids: Vec<u64> = json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|record| record["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn elements_page_past_the_end_is_empty() {
    let (status, json) = get_json(test_router(None), "/api/v1/elements?page=9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 12);
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn elements_filter_by_keyword_substring() {
    // %E9%9F%A9 is 韩; only 韩江 matches.
    let (status, json) =
        get_json(test_router(None), "/api/v1/elements?keyword=%E9%9F%A9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["name"], "韩江");
    assert_eq!(json["data"][0]["length"], "156.8");
}

#[tokio::test]
async fn river_detail_returns_enriched_record() {
    let (status, json) = get_json(test_router(None), "/api/v1/rivers/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "梅江");
    assert_eq!(json["basin"], "韩江流域");
    assert_eq!(json["management"], "梅州市水务局");
    assert_eq!(json["updateTime"], "2024-01-15 14:30:25");
}

#[tokio::test]
async fn river_detail_unknown_id_degrades_to_default_record() {
    let (status, json) = get_json(test_router(None), "/api/v1/rivers/999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "水东河");
    assert_eq!(json["level"], "二级河流");
}

#[tokio::test]
async fn station_detail_stamps_requested_id() {
    let (status, json) = get_json(test_router(None), "/api/v1/stations/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 42);
    assert_eq!(json["name"], "梅江水位站");
    assert_eq!(json["waterLevel"], "2.35");
    assert_eq!(json["riskLevel"], 1);
}

#[tokio::test]
async fn risk_statistics_return_three_tiers() {
    let (status, json) = get_json(test_router(None), "/api/v1/risk-statistics").await;

    assert_eq!(status, StatusCode::OK);
    let tiers = json.as_array().expect("array body");
    assert_eq!(tiers.len(), 3);
    assert_eq!(tiers[0]["type"], "normal");
    assert_eq!(tiers[0]["iconColor"], "#3490dc");
    assert_eq!(tiers[2]["type"], "high");
    assert_eq!(tiers[2]["waterLevel"], "4.2m");
}

#[tokio::test]
async fn layer_configs_return_ten_overlays() {
    let (status, json) = get_json(test_router(None), "/api/v1/layer-configs").await;

    assert_eq!(status, StatusCode::OK);
    let layers = json.as_array().expect("array body");
    assert_eq!(layers.len(), 10);

    let heliu = layers
        .iter()
        .find(|layer| layer["name"] == "heliu")
        .expect("heliu layer");
    assert_eq!(heliu["layer"], "floodwarning:river");
    assert_eq!(heliu["url"], "http://localhost:8090/geoserver/wms");
    assert_eq!(heliu["show"], true);

    let hidden = layers.iter().filter(|layer| layer["show"] == false).count();
    assert_eq!(hidden, 6);
}

#[tokio::test]
async fn proxy_routes_absent_without_upstream() {
    let response = test_router(None)
        .oneshot(
            Request::builder()
                .uri("/api/v1/upstream/basin-dict")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn proxy_passes_upstream_body_through() {
    let mock = Arc::new(MockUpstreamClient::new());
    mock.set_basin_dict_result(Ok(json!({"basins": ["韩江流域"]})));

    let app = test_router(Some(mock as Arc<dyn UpstreamClient>));
    let (status, json) = get_json(app, "/api/v1/upstream/basin-dict").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["basins"][0], "韩江流域");
}

#[tokio::test]
async fn proxy_maps_upstream_failure_to_bad_gateway() {
    let mock = Arc::new(MockUpstreamClient::new());
    mock.set_basin_dict_result(Err(UpstreamError::Status {
        status: 500,
        body: "boom".to_string(),
    }));

    let app = test_router(Some(mock as Arc<dyn UpstreamClient>));
    let (status, json) = get_json(app, "/api/v1/upstream/basin-dict").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["status"], 502);
    assert_eq!(json["title"], "Bad Gateway");
    assert!(json["detail"].as_str().expect("detail").contains("500"));
}

#[tokio::test]
async fn flood_risk_proxy_forwards_query_filters() {
    let mock = Arc::new(MockUpstreamClient::new());
    mock.set_flood_risk_result(Ok(json!({"rows": [1, 2]})));

    let app = test_router(Some(Arc::clone(&mock) as Arc<dyn UpstreamClient>));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/upstream/flood-risk?type=urban&code=MZ01")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let calls = mock.flood_risk_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].risk_type.as_deref(), Some("urban"));
    assert_eq!(calls[0].code.as_deref(), Some("MZ01"));
}

#[tokio::test]
async fn file_proxy_forwards_path() {
    let mock = Arc::new(MockUpstreamClient::new());
    mock.set_file_select_result(Ok(json!({"files": []})));

    let app = test_router(Some(Arc::clone(&mock) as Arc<dyn UpstreamClient>));
    let (status, _) = get_json(app, "/api/v1/upstream/files?path=/rasters/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mock.file_select_calls(), vec!["/rasters/2024".to_string()]);
}
