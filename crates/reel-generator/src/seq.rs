use crate::Generator;
use reel_core::MovieId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequential id generator producing "seq000000", "seq000001", etc.
///
/// Ids are unique within a single instance. Useful wherever predictable ids
/// are wanted, such as tests.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Starts counting from `offset` instead of zero.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = MovieId;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        MovieId::new(format!("{}{:06}", self.prefix, count))
    }
}
