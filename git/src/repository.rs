use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{Commit, ObjectType, Oid, Repository as RawRepository, Sort, Tree};
use tempfile::TempDir;

use crate::error::{GitError, Result};

/// Metadata of the most recent commit that touched a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub date: DateTime<Utc>,
}

/// Read-only view over a repository's history and trees.
///
/// All operations take an explicit resolved revision and never mutate the
/// working copy, so two revisions can be inspected independently without
/// the checkout-and-restore dance a mutable worktree would require.
pub trait RevisionSource {
    /// Resolve a revision reference (tag, branch, commit id) to a commit id.
    fn resolve(&self, rev: &str) -> Result<Oid>;

    /// List the names of all entries in `dir` as of the given revision.
    fn list_dir(&self, rev: Oid, dir: &str) -> Result<Vec<String>>;

    /// Read the full contents of the file at `path` as of the given revision.
    fn read_file(&self, rev: Oid, path: &str) -> Result<Vec<u8>>;

    /// Find the most recent commit at or before `rev` that changed `path`.
    fn last_commit_for_path(&self, rev: Oid, path: &str) -> Result<CommitInfo>;
}

/// A git2-backed [`RevisionSource`].
pub struct GitRepository {
    repo: RawRepository,
    // Keeps a cloned working copy on disk for as long as the handle lives.
    _clone_dir: Option<TempDir>,
}

impl GitRepository {
    /// Open an existing repository at or above the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = RawRepository::discover(path.as_ref()).map_err(|e| {
            GitError::RepositoryError(format!(
                "Failed to open git repository at {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self {
            repo,
            _clone_dir: None,
        })
    }

    /// Clone a repository into a fresh temporary directory.
    ///
    /// The clone is removed from disk when the returned value is dropped,
    /// which keeps every diff call isolated in its own working copy.
    pub fn clone(url: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let repo = RawRepository::clone(url, dir.path()).map_err(|e| {
            GitError::RepositoryError(format!("Failed to clone repository {}: {}", url, e))
        })?;
        Ok(Self {
            repo,
            _clone_dir: Some(dir),
        })
    }

    fn commit_tree(&self, rev: Oid) -> Result<Tree<'_>> {
        let commit = self.repo.find_commit(rev)?;
        Ok(commit.tree()?)
    }

    /// The object id of `path` within a tree, or None when the path is absent.
    fn entry_id(tree: &Tree<'_>, path: &Path) -> Option<Oid> {
        tree.get_path(path).ok().map(|entry| entry.id())
    }

    fn changed_from_parents(&self, commit: &Commit<'_>, path: &Path, id: Oid) -> Result<bool> {
        if commit.parent_count() == 0 {
            return Ok(true);
        }
        for parent in commit.parents() {
            if Self::entry_id(&parent.tree()?, path) == Some(id) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl RevisionSource for GitRepository {
    fn resolve(&self, rev: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(rev)
            .map_err(|_| GitError::RevisionNotFound(rev.to_string()))?;
        let commit = object
            .peel_to_commit()
            .map_err(|_| GitError::RevisionNotFound(rev.to_string()))?;
        Ok(commit.id())
    }

    fn list_dir(&self, rev: Oid, dir: &str) -> Result<Vec<String>> {
        let tree = self.commit_tree(rev)?;

        // The repository root is a valid directory to diff.
        let listed: Vec<String> = if dir.is_empty() || dir == "." {
            tree.iter().filter_map(|e| e.name().map(String::from)).collect()
        } else {
            let entry = tree.get_path(Path::new(dir)).map_err(|_| GitError::PathNotFound {
                path: dir.to_string(),
                revision: rev.to_string(),
            })?;
            let object = entry.to_object(&self.repo)?;
            let subtree = object.as_tree().ok_or_else(|| {
                GitError::RepositoryError(format!(
                    "Path '{}' at revision {} is not a directory",
                    dir, rev
                ))
            })?;
            subtree
                .iter()
                .filter_map(|e| e.name().map(String::from))
                .collect()
        };

        Ok(listed)
    }

    fn read_file(&self, rev: Oid, path: &str) -> Result<Vec<u8>> {
        let tree = self.commit_tree(rev)?;
        let entry = tree.get_path(Path::new(path)).map_err(|_| GitError::PathNotFound {
            path: path.to_string(),
            revision: rev.to_string(),
        })?;
        if entry.kind() != Some(ObjectType::Blob) {
            return Err(GitError::RepositoryError(format!(
                "Path '{}' at revision {} is not a file",
                path, rev
            )));
        }
        let object = entry.to_object(&self.repo)?;
        let blob = object.as_blob().ok_or_else(|| {
            GitError::RepositoryError(format!("Failed to read blob for '{}'", path))
        })?;
        Ok(blob.content().to_vec())
    }

    fn last_commit_for_path(&self, rev: Oid, path: &str) -> Result<CommitInfo> {
        let target = Path::new(path);
        if Self::entry_id(&self.commit_tree(rev)?, target).is_none() {
            return Err(GitError::PathNotFound {
                path: path.to_string(),
                revision: rev.to_string(),
            });
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(rev)?;
        revwalk.set_sorting(Sort::TIME)?;

        // Newest first; the first commit whose version of the path differs
        // from all of its parents is the last one that touched it.
        for id in revwalk {
            let commit = self.repo.find_commit(id?)?;
            let Some(current) = Self::entry_id(&commit.tree()?, target) else {
                continue;
            };
            if self.changed_from_parents(&commit, target, current)? {
                let date = Utc
                    .timestamp_opt(commit.time().seconds(), 0)
                    .single()
                    .ok_or_else(|| {
                        GitError::RepositoryError(format!(
                            "Commit {} has an invalid timestamp",
                            commit.id()
                        ))
                    })?;
                return Ok(CommitInfo {
                    hash: commit.id().to_string(),
                    date,
                });
            }
        }

        Err(GitError::RepositoryError(format!(
            "No commit found touching '{}' at revision {}",
            path, rev
        )))
    }
}
