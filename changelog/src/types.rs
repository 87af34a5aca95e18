use chrono::{DateTime, Utc};

use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// One changelog entry file as observed at a point in history.
///
/// `issue` is the entry's filename and is unique within one diff result;
/// `date` and `hash` identify the most recent commit that touched the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub issue: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub hash: String,
}

impl Entry {
    /// Build an entry straight from text, without commit metadata.
    ///
    /// Used when the body comes from somewhere other than repository
    /// history, e.g. a file on disk or a pull request description.
    pub fn new(issue: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            body: body.into(),
            date: DateTime::UNIX_EPOCH,
            hash: String::new(),
        }
    }
}

/// A single classified release-note fragment extracted from an entry body.
///
/// `kind` is a free-form category label; validating it against a recognized
/// vocabulary is the caller's job, not the extractor's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub kind: String,
    pub body: String,
    pub issue: String,
}
