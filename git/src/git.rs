pub mod error;
pub mod repository;

pub use error::{GitError, Result, ResultExt};
pub use git2::Oid;
pub use repository::{CommitInfo, GitRepository, RevisionSource};
