use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use reel_core::{Catalog, CatalogError, Movie, MovieId};
use reel_gateway::{App, AppState, CorsConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

/// A catalog whose reads blow up, standing in for an unexpected bug.
struct BrokenCatalog;

#[async_trait]
impl Catalog for BrokenCatalog {
    async fn list(&self, _genre: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        panic!("list exploded");
    }

    async fn get(&self, id: &MovieId) -> Result<Movie, CatalogError> {
        Err(CatalogError::NotFound(id.clone()))
    }

    async fn create(&self, _candidate: &Value) -> Result<Movie, CatalogError> {
        panic!("create exploded");
    }

    async fn update(&self, id: &MovieId, _candidate: &Value) -> Result<Movie, CatalogError> {
        Err(CatalogError::NotFound(id.clone()))
    }

    async fn delete(&self, id: &MovieId) -> Result<(), CatalogError> {
        Err(CatalogError::NotFound(id.clone()))
    }
}

#[tokio::test]
async fn handler_panic_becomes_internal_error() {
    let router = App::router(AppState::new(Arc::new(BrokenCatalog)), CorsConfig::default());

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Internal server error" }));

    // the router keeps serving afterwards
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
