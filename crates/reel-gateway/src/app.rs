use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::cors::{cors_gate, cors_layer, CorsConfig};
use crate::error::handle_panic;
use crate::handlers::{
    create_movie_handler, delete_movie_handler, fallback_handler, get_movie_handler,
    health_handler, list_movies_handler, method_not_allowed_handler, root_handler,
    update_movie_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the full router. Layers run outermost first: tracing, panic
    /// recovery, the origin gate, then CORS headers.
    pub fn router(state: AppState, cors: CorsConfig) -> Router {
        let headers = cors_layer(&cors);

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/movies", get(list_movies_handler).post(create_movie_handler))
            .route(
                "/movies/{id}",
                get(get_movie_handler)
                    .patch(update_movie_handler)
                    .delete(delete_movie_handler),
            )
            .method_not_allowed_fallback(method_not_allowed_handler)
            .fallback(fallback_handler)
            .with_state(state)
            .layer(headers)
            .layer(middleware::from_fn_with_state(Arc::new(cors), cors_gate))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http())
    }
}
