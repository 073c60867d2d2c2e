//! Core types and traits for the Reel movie catalog.
//!
//! This crate provides the movie data model, the request-body validator,
//! and the store/catalog traits shared by the storage backend, the
//! catalog service and the HTTP gateway.

pub mod catalog;
pub mod error;
pub mod genre;
pub mod movie;
pub mod repository;
pub mod validation;

pub use catalog::Catalog;
pub use error::{CatalogError, FieldIssue, StorageError, ValidationError};
pub use genre::Genre;
pub use movie::{Movie, MovieId, MoviePatch, NewMovie};
pub use repository::{ReadRepository, Repository};
pub use validation::MovieValidator;
