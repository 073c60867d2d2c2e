use crate::movie::MovieId;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A single violated constraint on one field of a candidate movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// The offending field, e.g. `year` or `genre[1]`.
    pub field: String,
    /// Human readable description of the violation.
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field-level violation found while validating a candidate movie.
///
/// Serializes as the bare list of issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Builds an error from collected issues. Returns `None` when there are none.
    pub fn from_issues(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns true if any issue concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("movie id already exists: {0}")]
    Conflict(String),
    #[error("seed data is invalid: {0}")]
    InvalidSeed(String),
    #[error("failed to read seed data: {0}")]
    Io(String),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("invalid movie: {0}")]
    Validation(#[from] ValidationError),
    #[error("movie not found: {0}")]
    NotFound(MovieId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_issue_list_is_not_an_error() {
        assert!(ValidationError::from_issues(Vec::new()).is_none());
    }

    #[test]
    fn display_joins_every_issue() {
        let err = ValidationError::from_issues(vec![
            FieldIssue::new("title", "is required"),
            FieldIssue::new("year", "must be an integer"),
        ])
        .unwrap();

        assert_eq!(err.to_string(), "title: is required; year: must be an integer");
        assert!(err.has_field("year"));
        assert!(!err.has_field("rate"));
    }

    #[test]
    fn serializes_as_issue_list() {
        let err =
            ValidationError::from_issues(vec![FieldIssue::new("rate", "must be a number")]).unwrap();

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "rate", "message": "must be a number" }])
        );
    }
}
