use thiserror::Error;

/// A requested version has no section in the changelog document.
///
/// Carries the version label so callers can tell "not found" apart from
/// configuration errors, and compare two not-found errors by value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("version {version} not found")]
pub struct VersionNotFoundError {
    pub version: String,
}

impl VersionNotFoundError {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog input: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse changelog: {0}")]
    ParseError(String),

    #[error(transparent)]
    VersionNotFound(#[from] VersionNotFoundError),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git::GitError),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Whether this error is a not-found for the given version label.
    pub fn is_version_not_found(&self, version: &str) -> bool {
        matches!(self, Self::VersionNotFound(e) if e.version == version)
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::ParseError(msg) => format!("Failed to parse changelog: {msg}"),
            Self::VersionNotFound(e) => e.to_string(),
            Self::RegexError(e) => format!("Regular expression error: {e}"),
            Self::Git(e) => e.user_message(),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
