//! Seed datasets loaded into the store at startup.
//!
//! A seed is a JSON array of complete movies, ids included. Every entry is
//! run through full validation so the store never starts out holding a record
//! the API itself would refuse.

use reel_core::{Movie, MovieId, MovieValidator, StorageError};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

type Result<T> = std::result::Result<T, StorageError>;

/// The dataset bundled with the service.
pub const BUNDLED_SEED: &str = include_str!("../data/movies.json");

/// Parses and validates the bundled dataset.
pub fn bundled() -> Result<Vec<Movie>> {
    parse(BUNDLED_SEED, &MovieValidator::current())
}

/// Reads, parses and validates a seed file from disk.
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("{}: {e}", path.display())))?;
    parse(&raw, &MovieValidator::current())
}

/// Parses a seed document. Fails on the first invalid entry or duplicate id.
pub fn parse(raw: &str, validator: &MovieValidator) -> Result<Vec<Movie>> {
    let entries: Vec<Value> = serde_json::from_str(raw)
        .map_err(|e| StorageError::InvalidSeed(format!("not a JSON array of movies: {e}")))?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut movies = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| StorageError::InvalidSeed(format!("entry {index} has no id")))?;

        if !seen.insert(id.to_string()) {
            return Err(StorageError::InvalidSeed(format!(
                "entry {index} reuses id {id}"
            )));
        }

        let movie = validator
            .validate_full(entry)
            .map_err(|e| StorageError::InvalidSeed(format!("entry {index} ({id}): {e}")))?;
        movies.push(Movie::new(MovieId::new(id), movie));
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::Genre;

    fn validator() -> MovieValidator {
        MovieValidator::new(1900, 2026)
    }

    #[test]
    fn bundled_seed_is_valid() {
        let movies = bundled().unwrap();

        assert_eq!(movies.len(), 11);
        assert_eq!(movies[0].title, "The Shawshank Redemption");
        assert_eq!(movies[0].id.as_str(), "dcdd0fad-a94c-4810-8acc-5f108d3b18c3");
        assert!(movies[4].has_genre(Genre::Romance));
    }

    #[test]
    fn rejects_missing_id() {
        let raw = r#"[{"title":"A","year":2000,"director":"B","duration":90,"poster":"https://x/a.jpg","genre":["Drama"]}]"#;

        let err = parse(raw, &validator()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSeed(msg) if msg.contains("no id")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entry = r#"{"id":"a","title":"A","year":2000,"director":"B","duration":90,"poster":"https://x/a.jpg","genre":["Drama"]}"#;
        let raw = format!("[{entry},{entry}]");

        let err = parse(&raw, &validator()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSeed(msg) if msg.contains("reuses id a")));
    }

    #[test]
    fn rejects_invalid_entry() {
        let raw = r#"[{"id":"a","title":"","year":2000,"director":"B","duration":90,"poster":"https://x/a.jpg","genre":["Drama"]}]"#;

        let err = parse(raw, &validator()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSeed(msg) if msg.contains("title")));
    }

    #[test]
    fn rejects_non_array() {
        let err = parse(r#"{"movies":[]}"#, &validator()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSeed(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
