pub mod diff;
pub mod error;
pub mod note;
pub mod parser;
pub mod types;

pub use diff::{NO_LOWER_BOUND, diff, diff_local, diff_with_source};
pub use error::{ChangelogError, VersionNotFoundError};
pub use note::notes_from_entry;
pub use parser::{ByteRange, Section, SectionParser, SectionRange};
pub use types::{Entry, Note, Result};
