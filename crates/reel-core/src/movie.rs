use crate::genre::Genre;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned identifier of a movie.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A movie stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A fully validated movie that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// The validated subset of fields supplied by a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl Movie {
    pub fn new(id: MovieId, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            director: movie.director,
            duration: movie.duration,
            poster: movie.poster,
            genre: movie.genre,
            rate: movie.rate,
        }
    }

    /// Overlays every field present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    /// Returns true if the movie is tagged with `genre`.
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genre.contains(&genre)
    }
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: MovieId::new("m-1"),
            title: "Inception".to_string(),
            year: 2010,
            director: "Christopher Nolan".to_string(),
            duration: 148,
            poster: "https://example.com/inception.jpg".to_string(),
            genre: vec![Genre::Action, Genre::SciFi],
            rate: 8.8,
        }
    }

    #[test]
    fn apply_overlays_only_supplied_fields() {
        let mut movie = movie();
        movie.apply(MoviePatch {
            year: Some(2011),
            genre: Some(vec![Genre::Drama]),
            ..MoviePatch::default()
        });

        assert_eq!(movie.year, 2011);
        assert_eq!(movie.genre, vec![Genre::Drama]);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.id.as_str(), "m-1");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut movie = movie();
        let patch = MoviePatch::default();
        assert!(patch.is_empty());

        movie.apply(patch);
        assert_eq!(movie, self::movie());
    }

    #[test]
    fn serializes_fields_in_declared_order() {
        let json = serde_json::to_string(&movie()).unwrap();
        assert!(json.starts_with(r#"{"id":"m-1","title":"Inception","year":2010"#));
        assert!(json.ends_with(r#""genre":["Action","Sci-Fi"],"rate":8.8}"#));
    }
}
