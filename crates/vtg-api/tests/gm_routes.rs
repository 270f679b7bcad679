//! Router tests with the GM adapter behind it
//!
//! The GM API is faked by `MockGmServer`; requests go through the router
//! in-process via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;
use vtg_api::{create_router, AppState};
use vtg_core::{StaticBrandSource, VehicleResolver};
use vtg_gateway::AdapterSelector;
use vtg_gm::testing::MockGmServer;
use vtg_gm::GmAdapter;

async fn setup() -> (MockGmServer, Router) {
    let upstream = MockGmServer::start().await.unwrap();
    let adapter = GmAdapter::from_config(&upstream.config()).unwrap();

    let mut selector = AdapterSelector::new();
    selector.register_adapter(Arc::new(adapter));

    let resolver = VehicleResolver::from_static(
        StaticBrandSource::new()
            .with("1234", "gm")
            .with("1235", "gm")
            // Known to the directory but not to the GM API
            .with("4321", "gm"),
    );

    (upstream, create_router(AppState::new(resolver, selector)))
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn engine(vehicle_id: &str, action: &str) -> Request<Body> {
    Request::post(format!("/vehicles/{vehicle_id}/engine"))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "action": action }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn doors_are_listed_in_upstream_order() {
    let (_upstream, app) = setup().await;

    let (status, json) = call(app, get("/vehicles/1234/doors")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"location": "frontLeft", "locked": false},
            {"location": "frontRight", "locked": true},
            {"location": "backLeft", "locked": false},
            {"location": "backRight", "locked": true},
        ])
    );
}

#[rstest]
#[case("1234", "fuel", json!({"percent": 30.2}))]
#[case("1234", "battery", json!({"percent": null}))]
#[case("1235", "fuel", json!({"percent": null}))]
#[case("1235", "battery", json!({"percent": 73.3}))]
#[tokio::test]
async fn energy_routes(#[case] vehicle_id: &str, #[case] route: &str, #[case] expected: Value) {
    let (_upstream, app) = setup().await;

    let (status, json) = call(app, get(&format!("/vehicles/{vehicle_id}/{route}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, expected);
}

#[rstest]
#[case("START", "success")]
#[case("STOP", "error")]
#[tokio::test]
async fn engine_actions(#[case] action: &str, #[case] expected: &str) {
    let (_upstream, app) = setup().await;

    let (status, json) = call(app, engine("1235", action)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": expected }));
}

#[tokio::test]
async fn invalid_action_never_reaches_upstream() {
    let (upstream, app) = setup().await;

    let (status, json) = call(app, engine("1234", "INVALID")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_command");
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn upstream_not_found_is_server_error() {
    let (_upstream, app) = setup().await;

    let (status, json) = call(app, get("/vehicles/4321")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "upstream_error");
    assert!(json["message"].as_str().unwrap().contains("4321"));
}
