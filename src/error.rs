//! Content errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading post content from disk
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed front-matter in {path:?}: {message}")]
    Syntax { path: PathBuf, message: String },

    #[error("Invalid front-matter in {path:?}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// A single problem found while validating front-matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing {
        field: String,
    },
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldIssue {
    /// Name of the offending field (`tags[1]` for sequence elements)
    pub fn field(&self) -> &str {
        match self {
            FieldIssue::Missing { field } | FieldIssue::InvalidType { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field } => write!(f, "`{}` is required", field),
            FieldIssue::InvalidType {
                field,
                expected,
                found,
            } => write!(f, "`{}` expected {}, found {}", field, expected, found),
        }
    }
}

/// Front-matter that did not match the post schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Whether any issue concerns the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field() == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    let parts: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    parts.join("; ")
}
