use async_trait::async_trait;
use reel_core::{Catalog, CatalogError, Genre, Movie, MovieId, MovieValidator, Repository};
use reel_generator::Generator;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A concrete implementation of the `Catalog` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Request body validation (full for create, partial for update)
/// - Server-side id assignment
/// - Not-found translation for id lookups
#[derive(Debug)]
pub struct CatalogService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    validator: MovieValidator,
}

impl<R, G> Clone for CatalogService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            validator: self.validator,
        }
    }
}

impl<R: Repository, G: Generator> CatalogService<R, G> {
    /// Creates a service validating release years against the current date.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_validator(repository, generator, MovieValidator::current())
    }

    pub fn with_validator(repository: R, generator: G, validator: MovieValidator) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            validator,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Catalog for CatalogService<R, G> {
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let Some(name) = genre.map(str::trim).filter(|name| !name.is_empty()) else {
            debug!("listing all movies");
            return Ok(self.repository.list(None).await?);
        };

        match name.parse::<Genre>() {
            Ok(genre) => {
                debug!(%genre, "listing movies by genre");
                Ok(self.repository.list(Some(genre)).await?)
            }
            // no stored movie can carry a genre outside the schema
            Err(e) => {
                debug!(error = %e, "filtering by unknown genre");
                Ok(Vec::new())
            }
        }
    }

    async fn get(&self, id: &MovieId) -> Result<Movie, CatalogError> {
        debug!(id = %id, "fetching movie");
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    async fn create(&self, candidate: &Value) -> Result<Movie, CatalogError> {
        let movie = self.validator.validate_full(candidate).map_err(|e| {
            warn!(error = %e, "rejected new movie");
            e
        })?;

        let movie = Movie::new(self.generator.generate().into(), movie);
        self.repository.insert(movie.clone()).await?;

        info!(id = %movie.id, title = %movie.title, "created movie");
        Ok(movie)
    }

    async fn update(&self, id: &MovieId, candidate: &Value) -> Result<Movie, CatalogError> {
        let patch = self.validator.validate_partial(candidate).map_err(|e| {
            warn!(id = %id, error = %e, "rejected movie update");
            e
        })?;

        let movie = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        info!(id = %movie.id, "updated movie");
        Ok(movie)
    }

    async fn delete(&self, id: &MovieId) -> Result<(), CatalogError> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound(id.clone()));
        }

        info!(id = %id, "deleted movie");
        Ok(())
    }
}
