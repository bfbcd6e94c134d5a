//! Contract tests for the ping and health endpoints.
//!
//! These run against an in-process app wired like main.rs, minus the
//! database-backed pieces. No PostgreSQL required.
//! Run with: cargo test --test health_contract

use actix_web::http::Method;
use actix_web::{App, test, web};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use rigops::api;

/// (1) GET on the ping route → 200 with the fixed pong payload.
#[actix_rt::test]
async fn test_ping_get_returns_pong() {
    let app = test::init_service(
        App::new().service(web::scope("/api/v1").configure(api::configure_health_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pong");
    assert_eq!(body["message"], "RigOps API is reachable");
    assert_eq!(body["url"], "/api/v1/ping");
    assert_eq!(body["method"], "GET");
    assert!(body["timestamp"].is_string());
}

/// (2) Every HTTP method gets the same 200 pong with its method echoed.
#[actix_rt::test]
async fn test_ping_answers_all_methods() {
    let app = test::init_service(
        App::new().service(web::scope("/api/v1").configure(api::configure_health_routes)),
    )
    .await;

    for method in [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
    ] {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri("/api/v1/ping")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "{method} should be answered");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "pong");
        assert_eq!(body["method"], method.as_str());
    }
}

/// (3) Unmatched paths fall through to the ping catch-all, echoing the
/// full URL including the query string.
#[actix_rt::test]
async fn test_unmatched_path_falls_through_to_ping() {
    let app = test::init_service(
        App::new()
            .service(web::scope("/api/v1").configure(api::configure_health_routes))
            .default_service(web::route().to(api::health::ping)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/rig/7/status?window=24h")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pong");
    assert_eq!(body["url"], "/rig/7/status?window=24h");
    assert_eq!(body["method"], "POST");
}

/// (4) Ping timestamps parse as RFC 3339 and never move backwards.
#[actix_rt::test]
async fn test_ping_timestamps_are_ordered() {
    let app = test::init_service(
        App::new().service(web::scope("/api/v1").configure(api::configure_health_routes)),
    )
    .await;

    let mut previous: Option<DateTime<FixedOffset>> = None;
    for _ in 0..10 {
        let req = test::TestRequest::get().uri("/api/v1/ping").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let raw = body["timestamp"].as_str().unwrap();
        let stamp = DateTime::parse_from_rfc3339(raw).unwrap();
        if let Some(prev) = previous {
            assert!(stamp >= prev, "timestamps must not move backwards");
        }
        previous = Some(stamp);
    }
}

/// (5) Health endpoint reports healthy.
#[actix_rt::test]
async fn test_health_reports_healthy() {
    let app = test::init_service(
        App::new().service(web::scope("/api/v1").configure(api::configure_health_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
