use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("No changelog entry found in {0}")]
    NoNotesFound(String),

    #[error("Unknown changelog entry type '{0}'")]
    InvalidNoteType(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::NoNotesFound(issue) => format!("No changelog entry found in {issue}"),
            Self::InvalidNoteType(kind) => format!(
                "Unknown changelog entry type '{kind}' (expected one of: {})",
                crate::note_types::TYPE_VALUES.join(", ")
            ),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
