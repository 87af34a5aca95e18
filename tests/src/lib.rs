//! Shared fixtures for integration tests: throwaway git repositories with
//! controlled commit timestamps.

use std::fs;
use std::path::Path;

use git2::{Commit, IndexAddOption, Repository, Signature, Time};
use tempfile::TempDir;

pub struct TestRepo {
    pub repo: Repository,
    dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::init()
    }
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        Self { repo, dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Write the given files, stage everything (including deletions made
    /// beforehand with [`TestRepo::remove_file`]) and commit, pinning the
    /// commit timestamp to `when` seconds since the epoch.
    pub fn commit_files(&self, files: &[(&str, &str)], message: &str, when: i64) -> String {
        for (path, contents) in files {
            let full = self.dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("create parent dirs");
            }
            fs::write(full, contents).expect("write file");
        }

        let mut index = self.repo.index().expect("open index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("stage new files");
        index.update_all(["*"].iter(), None).expect("stage removals");
        index.write().expect("write index");
        let tree_id = index.write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");

        let sig = Signature::new("Test Author", "author@example.com", &Time::new(when, 0))
            .expect("signature");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("create commit");
        oid.to_string()
    }

    /// Delete a file from the working tree; the removal is staged by the
    /// next [`TestRepo::commit_files`] call.
    pub fn remove_file(&self, path: &str) {
        fs::remove_file(self.dir.path().join(path)).expect("remove file");
    }

    /// Create a lightweight tag pointing at the current HEAD commit.
    pub fn tag(&self, name: &str) {
        let commit = self
            .repo
            .head()
            .expect("head")
            .peel_to_commit()
            .expect("peel to commit");
        self.repo
            .tag_lightweight(name, &commit.into_object(), false)
            .expect("create tag");
    }
}
