//! Schema checks for untyped movie payloads.
//!
//! Both entry points take an arbitrary JSON value and never panic: anything
//! malformed becomes a [`ValidationError`] listing every violated field.

use crate::error::{FieldIssue, ValidationError};
use crate::genre::Genre;
use crate::movie::{MoviePatch, NewMovie};
use serde_json::{Map, Value};
use url::Url;

pub const MIN_YEAR: i32 = 1900;
pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 10.0;
pub const DEFAULT_RATE: f64 = 0.0;
/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const KNOWN_FIELDS: [&str; 7] = [
    "title", "year", "director", "duration", "poster", "genre", "rate",
];
/// Tolerated in partial updates, never applied.
const ID_FIELD: &str = "id";

/// Validates candidate movies against the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieValidator {
    min_year: i32,
    max_year: i32,
}

impl MovieValidator {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Accepts release years from 1900 up to next year, per the local clock.
    pub fn current() -> Self {
        let this_year = i32::from(jiff::Zoned::now().year());
        Self::new(MIN_YEAR, this_year + 1)
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Checks a complete movie. Unknown keys, including a client supplied
    /// `id`, are dropped.
    pub fn validate_full(&self, candidate: &Value) -> Result<NewMovie, ValidationError> {
        let fields = as_object(candidate)?;
        let mut issues = Issues::default();

        let title = issues.check("title", required(fields, "title").and_then(parse_text));
        let year = issues.check(
            "year",
            required(fields, "year").and_then(|value| self.parse_year(value)),
        );
        let director = issues.check(
            "director",
            required(fields, "director").and_then(parse_text),
        );
        let duration = issues.check(
            "duration",
            required(fields, "duration").and_then(parse_duration),
        );
        let poster = issues.check("poster", required(fields, "poster").and_then(parse_poster));
        let genre = match required(fields, "genre") {
            Ok(value) => issues.extend(parse_genres(value)),
            Err(message) => issues.check::<Vec<Genre>>("genre", Err(message)),
        };
        let rate = match fields.get("rate") {
            Some(value) => issues.check("rate", parse_rate(value)),
            None => Some(DEFAULT_RATE),
        };

        match (title, year, director, duration, poster, genre, rate) {
            (
                Some(title),
                Some(year),
                Some(director),
                Some(duration),
                Some(poster),
                Some(genre),
                Some(rate),
            ) if issues.is_empty() => Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate,
            }),
            _ => Err(issues.into_error()),
        }
    }

    /// Checks the fields present in a partial update. An empty object is a
    /// valid no-op; keys outside the schema are rejected.
    pub fn validate_partial(&self, candidate: &Value) -> Result<MoviePatch, ValidationError> {
        let fields = as_object(candidate)?;
        let mut issues = Issues::default();
        let mut patch = MoviePatch::default();

        if let Some(value) = fields.get("title") {
            patch.title = issues.check("title", parse_text(value));
        }
        if let Some(value) = fields.get("year") {
            patch.year = issues.check("year", self.parse_year(value));
        }
        if let Some(value) = fields.get("director") {
            patch.director = issues.check("director", parse_text(value));
        }
        if let Some(value) = fields.get("duration") {
            patch.duration = issues.check("duration", parse_duration(value));
        }
        if let Some(value) = fields.get("poster") {
            patch.poster = issues.check("poster", parse_poster(value));
        }
        if let Some(value) = fields.get("genre") {
            patch.genre = issues.extend(parse_genres(value));
        }
        if let Some(value) = fields.get("rate") {
            patch.rate = issues.check("rate", parse_rate(value));
        }

        for key in fields.keys() {
            if key != ID_FIELD && !KNOWN_FIELDS.contains(&key.as_str()) {
                issues.push(FieldIssue::new(key.as_str(), "is not a recognized field"));
            }
        }

        if issues.is_empty() {
            Ok(patch)
        } else {
            Err(issues.into_error())
        }
    }

    fn parse_year(&self, value: &Value) -> Result<i32, String> {
        let year = whole_number(value).ok_or_else(|| "must be an integer".to_string())?;
        if year < i64::from(self.min_year) || year > i64::from(self.max_year) {
            return Err(format!(
                "must be between {} and {}",
                self.min_year, self.max_year
            ));
        }
        // bounded by the check above
        Ok(year as i32)
    }
}

impl Default for MovieValidator {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(FieldIssue::new(field, message));
                None
            }
        }
    }

    fn extend<T>(&mut self, result: Result<T, Vec<FieldIssue>>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(issues) => {
                self.0.extend(issues);
                None
            }
        }
    }

    fn push(&mut self, issue: FieldIssue) {
        self.0.push(issue);
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_error(self) -> ValidationError {
        ValidationError::new(self.0)
    }
}

fn as_object(candidate: &Value) -> Result<&Map<String, Value>, ValidationError> {
    candidate.as_object().ok_or_else(|| {
        ValidationError::new(vec![FieldIssue::new("body", "must be a JSON object")])
    })
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, String> {
    fields.get(name).ok_or_else(|| "is required".to_string())
}

fn parse_text(value: &Value) -> Result<String, String> {
    let text = value.as_str().ok_or_else(|| "must be a string".to_string())?;
    if text.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(text.to_string())
}

/// Integer view of a JSON number, accepting floats with no fractional part
/// (`2001.0` is the same number as `2001`).
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER)
            .map(|n| n as i64)
    })
}

fn parse_duration(value: &Value) -> Result<u32, String> {
    let minutes = value
        .as_u64()
        .or_else(|| whole_number(value).and_then(|n| u64::try_from(n).ok()))
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| "must be a positive integer".to_string())?;
    u32::try_from(minutes).map_err(|_| format!("must be at most {}", u32::MAX))
}

fn parse_rate(value: &Value) -> Result<f64, String> {
    let rate = value
        .as_f64()
        .ok_or_else(|| "must be a number".to_string())?;
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(format!("must be between {MIN_RATE} and {MAX_RATE}"));
    }
    Ok(rate)
}

fn parse_poster(value: &Value) -> Result<String, String> {
    let poster = value.as_str().ok_or_else(|| "must be a string".to_string())?;
    Url::parse(poster).map_err(|e| format!("must be a valid URL ({e})"))?;
    Ok(poster.to_string())
}

fn parse_genres(value: &Value) -> Result<Vec<Genre>, Vec<FieldIssue>> {
    let Some(items) = value.as_array() else {
        return Err(vec![FieldIssue::new("genre", "must be an array of genres")]);
    };
    if items.is_empty() {
        return Err(vec![FieldIssue::new(
            "genre",
            "must contain at least one genre",
        )]);
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut issues = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match item.as_str().map(str::parse::<Genre>) {
            Some(Ok(genre)) => genres.push(genre),
            _ => issues.push(FieldIssue::new(
                format!("genre[{i}]"),
                format!("must be one of {}", Genre::names()),
            )),
        }
    }

    if issues.is_empty() {
        Ok(genres)
    } else {
        Err(issues)
    }
}
