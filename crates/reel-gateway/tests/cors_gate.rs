use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use reel_catalog::CatalogService;
use reel_gateway::{App, AppState, CorsConfig};
use reel_generator::SeqGenerator;
use reel_storage::InMemoryRepository;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let catalog = CatalogService::new(
        InMemoryRepository::seeded().unwrap(),
        SeqGenerator::with_prefix("mv"),
    );
    App::router(AppState::new(Arc::new(catalog)), CorsConfig::default())
}

fn request(method: &str, uri: &str, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn request_without_origin_is_allowed() {
    let response = app()
        .oneshot(request("GET", "/movies", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let response = app()
        .oneshot(request("GET", "/movies", Some("http://localhost:8080")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:8080"
    );
}

#[tokio::test]
async fn disallowed_origin_is_rejected_before_handlers() {
    let router = app();

    let response = router
        .clone()
        .oneshot(request(
            "DELETE",
            "/movies/dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
            Some("https://evil.example"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Not allowed by CORS" }));

    // the movie survived
    let response = router
        .oneshot(request(
            "GET",
            "/movies/dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_answered() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/movies/some-id")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allow_methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allow_methods.contains("PATCH"));
    assert!(allow_methods.contains("DELETE"));
}

#[tokio::test]
async fn preflight_from_disallowed_origin_is_rejected() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/movies")
        .header(header::ORIGIN, "http://localhost:9999")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn custom_allow_list_replaces_defaults() {
    let catalog = CatalogService::new(
        InMemoryRepository::seeded().unwrap(),
        SeqGenerator::with_prefix("mv"),
    );
    let router = App::router(
        AppState::new(Arc::new(catalog)),
        CorsConfig::from_origins(["https://movies.example"]),
    );

    let allowed = router
        .clone()
        .oneshot(request("GET", "/", Some("https://movies.example")))
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);

    let rejected = router
        .oneshot(request("GET", "/", Some("http://localhost:3000")))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_utf8_origin_is_rejected() {
    let catalog = CatalogService::new(
        InMemoryRepository::seeded().unwrap(),
        SeqGenerator::with_prefix("mv"),
    );
    let router = App::router(
        AppState::new(Arc::new(catalog)),
        CorsConfig::from_origins(["https://movies.example", ""]),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/movies")
        .header(header::ORIGIN, HeaderValue::from_bytes(b"\xff").unwrap())
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
