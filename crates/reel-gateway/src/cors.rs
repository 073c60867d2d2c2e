//! Origin allow-list applied before any handler runs.
//!
//! Requests without an `Origin` header (same-origin browsers, curl) always
//! pass. Cross-origin requests pass only for listed origins and are answered
//! by [`cors_layer`] with the matching CORS headers; everything else is
//! refused by [`cors_gate`].

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::error::AppError;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:8080"];

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct CorsConfig {
    #[builder(default = DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect())]
    pub allowed_origins: BTreeSet<String>,
}

impl CorsConfig {
    pub fn from_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_origins = origins
            .into_iter()
            .map(Into::into)
            .map(|origin: String| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        Self::builder().allowed_origins(allowed_origins).build()
    }

    /// Whether a request carrying `origin` may proceed.
    pub fn permits(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed_origins.contains(origin),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Middleware rejecting requests from origins outside the allow-list.
pub async fn cors_gate(
    State(config): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        // a header that is not valid UTF-8 cannot be on the list
        let permitted = origin
            .to_str()
            .is_ok_and(|origin| config.permits(Some(origin)));
        if !permitted {
            warn!(
                ?origin,
                method = %request.method(),
                uri = %request.uri(),
                "rejected cross-origin request"
            );
            return Err(AppError::CorsRejected);
        }
    }

    Ok(next.run(request).await)
}

/// Response headers and preflight answers for allowed origins.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}
