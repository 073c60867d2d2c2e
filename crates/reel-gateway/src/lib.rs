//! HTTP gateway for the Reel movie catalog.
//!
//! Exposes the [`Catalog`](reel_core::Catalog) operations as a JSON API
//! behind an origin allow-list.

pub mod app;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod model;
pub mod server;
pub mod state;

pub use app::App;
pub use cors::CorsConfig;
pub use server::serve;
pub use state::AppState;
