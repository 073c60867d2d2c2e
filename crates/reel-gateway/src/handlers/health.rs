use crate::model::{HealthResponse, MessageResponse};
use axum::http::StatusCode;
use axum::Json;

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World!"))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn method_not_allowed_handler() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::new("Method not allowed")),
    )
}

pub async fn fallback_handler() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new("Not found")))
}
