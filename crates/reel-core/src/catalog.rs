use crate::error::CatalogError;
use crate::movie::{Movie, MovieId};
use async_trait::async_trait;
use serde_json::Value;

type Result<T> = std::result::Result<T, CatalogError>;

/// The movie catalog operations exposed over HTTP.
///
/// Request bodies are passed through untyped; implementations validate them
/// before touching the store.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Lists movies in store order. A non-empty `genre` restricts the result
    /// to movies carrying that genre, compared case-insensitively.
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>>;

    /// Fetches one movie, or `NotFound`.
    async fn get(&self, id: &MovieId) -> Result<Movie>;

    /// Validates `candidate`, assigns a fresh id and stores the movie.
    async fn create(&self, candidate: &Value) -> Result<Movie>;

    /// Validates the partial `candidate` and merges it into the stored movie.
    /// Nothing is written when validation fails.
    async fn update(&self, id: &MovieId, candidate: &Value) -> Result<Movie>;

    /// Removes one movie, or `NotFound`.
    async fn delete(&self, id: &MovieId) -> Result<()>;
}
