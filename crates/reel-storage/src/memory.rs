use crate::seed;
use async_trait::async_trait;
use parking_lot::RwLock;
use reel_core::repository::Result;
use reel_core::{Genre, Movie, MovieId, MoviePatch, ReadRepository, Repository, StorageError};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// In-memory implementation of the Repository trait.
///
/// Movies live in a `Vec` so insertion order is the listing order. Every
/// mutation takes the write lock for its whole read-modify-write, and the
/// lock is never held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `movies` in the given order.
    pub fn with_movies(movies: Vec<Movie>) -> Result<Self> {
        if let Some(dup) = first_duplicate(&movies) {
            return Err(StorageError::Conflict(dup.to_string()));
        }

        Ok(Self {
            movies: RwLock::new(movies),
        })
    }

    /// Creates a repository loaded with the bundled seed dataset.
    pub fn seeded() -> Result<Self> {
        Self::with_movies(seed::bundled()?)
    }

    /// Creates a repository loaded from a seed file on disk.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_movies(seed::from_file(path)?)
    }
}

fn first_duplicate(movies: &[Movie]) -> Option<&MovieId> {
    let mut seen = HashSet::with_capacity(movies.len());
    movies
        .iter()
        .map(|movie| &movie.id)
        .find(|id| !seen.insert(*id))
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn list(&self, genre: Option<Genre>) -> Result<Vec<Movie>> {
        let movies = self.movies.read();
        let listed = match genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| movie.has_genre(genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        };
        Ok(listed)
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>> {
        Ok(self.movies.read().iter().find(|movie| movie.id == *id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.movies.read().len())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, movie: Movie) -> Result<()> {
        let mut movies = self.movies.write();
        if movies.iter().any(|existing| existing.id == movie.id) {
            return Err(StorageError::Conflict(movie.id.to_string()));
        }

        debug!(id = %movie.id, "inserting movie");
        movies.push(movie);
        Ok(())
    }

    async fn update(&self, id: &MovieId, patch: MoviePatch) -> Result<Option<Movie>> {
        let mut movies = self.movies.write();
        let Some(movie) = movies.iter_mut().find(|movie| movie.id == *id) else {
            return Ok(None);
        };

        movie.apply(patch);
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: &MovieId) -> Result<bool> {
        let mut movies = self.movies.write();
        let Some(index) = movies.iter().position(|movie| movie.id == *id) else {
            return Ok(false);
        };

        movies.remove(index);
        Ok(true)
    }
}
