//! Route tests for the dashboard API, driven through the router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use dashboard_api::{build_router, config::DashboardConfig, state::AppState};
use dataset::{read_points, DatasetStore, LoadOptions};
use pheno_common::DoyPairing;
use test_utils::fixtures::SMALL_CSV;

fn store() -> DatasetStore {
    let points = read_points(SMALL_CSV.as_bytes(), &LoadOptions::default()).unwrap();
    DatasetStore::from_points(points, DoyPairing::Ordinal).unwrap()
}

fn app(variant: &str, token: Option<&str>) -> Router {
    let state = AppState::from_parts(
        store(),
        DashboardConfig::default(),
        Some(variant),
        token.map(str::to_string),
    )
    .unwrap();
    build_router(Arc::new(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

// ============================================================================
// Layout and controls
// ============================================================================

#[tokio::test]
async fn test_layout_hides_token() {
    let (status, body) = get(app("classic", Some("pk.secret")), "/api/layout").await;
    assert_eq!(status, StatusCode::OK);

    let value = json(&body);
    assert_eq!(value["variant"], "classic");
    assert_eq!(value["title"], "Phenology Library");
    assert_eq!(value["map_enabled"], true);
    assert_eq!(value["map"]["mapbox"]["style"], "light");
    assert!(!String::from_utf8_lossy(&body).contains("pk.secret"));
}

#[tokio::test]
async fn test_controls_for_each_variant() {
    let (_, body) = get(app("classic", None), "/api/controls").await;
    let classic = json(&body);
    assert_eq!(classic["land_cover"]["multi"], true);
    assert_eq!(classic["land_cover"]["options"].as_array().unwrap().len(), 20);
    assert_eq!(classic["land_cover"]["value"].as_array().unwrap().len(), 20);
    assert_eq!(classic["doy_slider"]["min"], 0);
    assert_eq!(classic["doy_slider"]["value"], 176);

    let (_, body) = get(app("bootstrap", None), "/api/controls").await;
    let bootstrap = json(&body);
    assert_eq!(bootstrap["land_cover"]["value"], "41");
    assert_eq!(bootstrap["doy_slider"]["max"], 353);
    assert_eq!(bootstrap["doy_slider"]["marks"][0]["value"], 1);
    assert_eq!(bootstrap["doy_slider"]["marks"][0]["label"], "0");
}

// ============================================================================
// Figures
// ============================================================================

#[tokio::test]
async fn test_map_figure() {
    let (status, body) = get(app("classic", Some("pk.test")), "/api/figures/map?lc=41&doy=176").await;
    assert_eq!(status, StatusCode::OK);

    let figure = json(&body);
    assert_eq!(figure["data"][0]["type"], "scattermapbox");
    assert_eq!(figure["data"][0]["customdata"], serde_json::json!(["P1", "P2"]));
    assert_eq!(figure["layout"]["mapbox"]["accesstoken"], "pk.test");
}

#[tokio::test]
async fn test_map_without_token_is_unavailable() {
    let (status, body) = get(app("classic", None), "/api/figures/map?lc=41&doy=176").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json(&body)["type"], "MapUnavailable");
}

#[tokio::test]
async fn test_bootstrap_slider_offset() {
    let (status, body) = get(app("bootstrap", Some("pk.test")), "/api/figures/map?lc=41&doy=177").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["data"][0]["lat"].as_array().unwrap().len(), 2);

    let (status, _) = get(app("bootstrap", Some("pk.test")), "/api/figures/map?lc=41&doy=176").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_scatter_multi_select() {
    let (status, body) = get(app("classic", None), "/api/figures/scatter?lc=41,82").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["data"][0]["x"].as_array().unwrap().len(), 5);

    let (status, body) = get(app("classic", None), "/api/figures/scatter?lc=99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json(&body)["data"][0]["x"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_doy_is_bad_request() {
    for uri in [
        "/api/figures/scatter?doy=177",
        "/api/figures/scatter?doy=abc",
        "/api/figures/scatter?doy=0",
    ] {
        let (status, body) = get(app("classic", None), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        let error = json(&body);
        assert_eq!(error["type"], "InvalidSelection");
        assert_eq!(error["status"], 400);
    }
}

#[tokio::test]
async fn test_bad_land_cover_is_bad_request() {
    let (status, _) = get(app("classic", None), "/api/figures/scatter?lc=forest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Time series
// ============================================================================

#[tokio::test]
async fn test_timeseries_without_hover_is_no_content() {
    let (status, body) = get(app("classic", None), "/api/figures/timeseries?lc=41").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = post(app("classic", None), "/api/figures/timeseries", "").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_timeseries_for_point() {
    let (status, body) = get(app("classic", None), "/api/figures/timeseries?point=P1").await;
    assert_eq!(status, StatusCode::OK);
    let figure = json(&body);
    assert_eq!(figure["data"][0]["x"], serde_json::json!([160.0, 176.0]));
    assert_eq!(figure["layout"]["title"], "P1 (Deciduous Forest)");
}

#[tokio::test]
async fn test_timeseries_from_hover_payload() {
    let payload = r#"{"points":[{"curveNumber":0,"pointIndex":2,"customdata":"P3"}]}"#;
    let (status, body) = post(app("classic", None), "/api/figures/timeseries?lc=82", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["data"][0]["name"], "P3");

    let (status, _) = post(app("classic", None), "/api/figures/timeseries", "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hover_without_customdata_is_no_content() {
    let payload = r#"{"points":[{"curveNumber":0,"pointIndex":0,"text":"Deciduous Forest"}]}"#;
    let (status, body) = post(app("classic", None), "/api/figures/timeseries", payload).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

// ============================================================================
// Table
// ============================================================================

#[tokio::test]
async fn test_table_with_selection() {
    let (status, body) = get(app("classic", None), "/api/table?doy=176&selected=0,2").await;
    assert_eq!(status, StatusCode::OK);
    let table = json(&body);
    assert_eq!(table["records"].as_array().unwrap().len(), 3);
    assert_eq!(table["selected_rows"], serde_json::json!([0, 2]));

    let (status, _) = get(app("classic", None), "/api/table?doy=176&selected=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get(app("classic", None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["status"], "ok");

    let (status, body) = get(app("bootstrap", None), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    let ready = json(&body);
    assert_eq!(ready["ready"], true);
    assert_eq!(ready["variant"], "bootstrap");
    assert_eq!(ready["map_enabled"], false);
    assert_eq!(ready["dataset"]["rows"], 5);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let (status, _) = get(app("classic", None), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_load_state_from_disk() {
    let data = test_utils::write_temp_csv(SMALL_CSV);
    let yaml = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        yaml.path(),
        "doy_pairing: ordinal\ntoken_file: /nonexistent/.mapbox_token\n",
    )
    .unwrap();

    let config = DashboardConfig::load(yaml.path()).unwrap();
    let state = AppState::load(config, data.path(), Some("bootstrap")).unwrap();

    assert_eq!(state.variant_name, "bootstrap");
    assert_eq!(state.dataset.len(), 5);
}

#[test]
fn test_load_state_missing_dataset_fails() {
    let err = AppState::load(
        DashboardConfig::default(),
        std::path::Path::new("/nonexistent/lcDF.csv"),
        None,
    )
    .err()
    .unwrap();
    assert!(format!("{:#}", err).contains("Dataset not found"));
}

#[test]
fn test_shipped_config_matches_builtin_variants() {
    let config = DashboardConfig::load(&test_utils::config_dir().join("dashboard.yaml")).unwrap();
    let builtin = DashboardConfig::default();

    for name in ["classic", "bootstrap"] {
        let (_, shipped) = config.variant(Some(name)).unwrap();
        let (_, expected) = builtin.variant(Some(name)).unwrap();
        assert_eq!(shipped.map, expected.map, "{}", name);
        assert_eq!(shipped.panels, expected.panels, "{}", name);
        assert_eq!(shipped.land_cover.default, expected.land_cover.default, "{}", name);
        assert_eq!(shipped.doy_slider.to_doy(shipped.doy_slider.default).unwrap(), 176);
    }
}
