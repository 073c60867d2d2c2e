//! Storage backends for the movie catalog.

pub mod memory;
pub mod seed;

pub use memory::InMemoryRepository;
pub use reel_core::{ReadRepository, Repository, StorageError};
