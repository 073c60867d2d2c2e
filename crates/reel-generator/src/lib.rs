pub mod seq;

use reel_core::MovieId;
use uuid::Uuid;

pub use seq::SeqGenerator;

/// Trait for generating movie ids.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<MovieId>;
    /// Generates a value that can be converted into a globally unique movie id.
    fn generate(&self) -> Self::Output;
}

/// Random version 4 UUIDs in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for UuidGenerator {
    type Output = MovieId;

    fn generate(&self) -> Self::Output {
        MovieId::new(Uuid::new_v4().to_string())
    }
}
