use crate::error::StorageError;
use crate::genre::Genre;
use crate::movie::{Movie, MovieId, MoviePatch};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the movie store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns the stored movies in insertion order, optionally restricted to
    /// those tagged with `genre`.
    async fn list(&self, genre: Option<Genre>) -> Result<Vec<Movie>>;

    /// Retrieves the movie with the given id.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>>;

    /// Number of stored movies.
    async fn count(&self) -> Result<usize>;
}

/// The movie store. Implementations must serialize mutations so that no
/// reader observes a partially applied change.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Appends a new movie. Returns `Err(Conflict)` if the id already exists.
    async fn insert(&self, movie: Movie) -> Result<()>;

    /// Overlays `patch` onto the stored movie in place and returns the merged
    /// record, or `None` if the id does not exist.
    async fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Option<Movie>>;

    /// Deletes the movie with the given id.
    /// Returns `true` if the movie existed and was removed.
    async fn delete(&self, id: &MovieId) -> Result<bool>;
}
