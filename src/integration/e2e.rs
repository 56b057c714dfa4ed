//! End-to-end integration tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::util::ServiceExt;

use crate::config::{LimitsConfig, ServerConfig};
use crate::http::create_router;
use crate::integration::fixtures::{convert_request, SBV_TWO_CUES, VTT_TWO_CUES};
use crate::state::AppState;

fn app_with_state() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(ServerConfig::default()));
    (create_router(state.clone()), state)
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    body["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_convert_end_to_end() {
    let (app, state) = app_with_state();
    let body = convert_request(SBV_TWO_CUES, Some("world"), Some("My Talk.sbv"));

    let response = app.oneshot(post_json(body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/vtt; charset=utf-8");
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"My_Talk.vtt\""
    );
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    assert_eq!(body_string(response).await, VTT_TWO_CUES);

    let stats = state.metrics.snapshot();
    assert_eq!(stats.conversions, 1);
    assert_eq!(stats.cues_emitted, 2);
}

#[tokio::test]
async fn test_convert_without_optional_fields() {
    let (app, _) = app_with_state();
    let body = convert_request("0:00:00.000,0:00:01.000\n<b>bold</b>", None, None);

    let response = app.oneshot(post_json(body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"subtitles.vtt\""
    );
    assert_eq!(
        body_string(response).await,
        "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\n&lt;b&gt;bold&lt;/b&gt;\n"
    );
}

#[tokio::test]
async fn test_malformed_sbv_is_not_an_error() {
    let (app, state) = app_with_state();
    let sbv = "0:00:00.000,0:00:01.000\nA\n\nno comma here\n0:00:01.000,0:00:02.000\nB";
    let body = convert_request(sbv, None, None);

    let response = app.oneshot(post_json(body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nA\n\n00:00:01.000 --> 00:00:02.000\nB\n"
    );
    assert_eq!(state.metrics.snapshot().skipped_time_lines, 1);
}

#[tokio::test]
async fn test_missing_sbv_text_is_bad_request() {
    let (app, state) = app_with_state();

    let response = app
        .oneshot(post_json(r#"{"italicsText":"x"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "sbvText is required");
    assert_eq!(state.metrics.snapshot().errors, 1);
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (app, _) = app_with_state();

    let response = app.oneshot(post_json("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (app, _) = app_with_state();
        let request = Request::builder()
            .method(method)
            .uri("/api/convert")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
        assert_eq!(error_message(response).await, "Method not allowed");
    }
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ServerConfig {
        limits: LimitsConfig {
            max_request_size_mb: 1,
        },
        ..Default::default()
    };
    let state = Arc::new(AppState::new(config));
    let app = create_router(state.clone());

    let huge = "x".repeat(2 * 1024 * 1024);
    let body = convert_request(&huge, None, None);

    let response = app.oneshot(post_json(body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(error_message(response).await, "Request body exceeds 1 MB");

    let stats = state.metrics.snapshot();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.conversions, 0);
    assert!(state
        .metrics
        .export_prometheus()
        .contains("sbv_vtt_errors_total{type=\"payload_too_large\"} 1"));
}

#[tokio::test]
async fn test_metrics_and_stats_endpoints() {
    let (app, _) = app_with_state();

    let body = convert_request(SBV_TWO_CUES, Some("world"), None);
    let response = app
        .clone()
        .oneshot(post_json(body.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let metrics = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(metrics.status(), StatusCode::OK);
    let text = body_string(metrics).await;
    assert!(text.contains("sbv_vtt_conversions_total 1"));
    assert!(text.contains("sbv_vtt_cues_emitted_total 2"));
    assert!(text.contains("endpoint=\"/api/convert\""));

    let stats = app
        .oneshot(Request::builder().uri("/debug/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let stats: serde_json::Value = serde_json::from_str(&body_string(stats).await).unwrap();
    assert_eq!(stats["conversions"], 1);
    assert!(stats["started_at"].is_string());
}

#[tokio::test]
async fn test_live_server_roundtrip() {
    let state = Arc::new(AppState::new(ServerConfig::default()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/convert", addr))
        .json(&convert_request(SBV_TWO_CUES, Some("world"), Some("talk")))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"talk.vtt\""
    );
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.text().await.unwrap(), VTT_TWO_CUES);

    let health = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(health.text().await.unwrap(), "OK");

    server.abort();
}
