use std::collections::BTreeSet;

use git::repository::{GitRepository, RevisionSource};

use crate::types::{Entry, Result};

/// Sentinel for "no lower bound": every entry present at the newer revision
/// is reported.
pub const NO_LOWER_BOUND: &str = "-";

/// Compute the changelog entries new in `dir` between two revisions of a
/// remote repository.
///
/// The repository is cloned into a fresh temporary directory for the
/// duration of the call, so concurrent diffs never share a working copy.
/// See [`diff_with_source`] for the exact semantics.
pub fn diff(repo: &str, ref1: &str, ref2: &str, dir: &str) -> Result<Vec<Entry>> {
    let source = GitRepository::clone(repo)?;
    diff_with_source(&source, ref1, ref2, dir)
}

/// Like [`diff`], but against an already-cloned local repository.
pub fn diff_local(path: &str, ref1: &str, ref2: &str, dir: &str) -> Result<Vec<Entry>> {
    let source = GitRepository::open(path)?;
    diff_with_source(&source, ref1, ref2, dir)
}

/// Compute the set of entries in `dir` that exist at `ref2` but not at
/// `ref1`, enriched with the metadata of the last commit touching each.
///
/// The diff is a pure filename-set subtraction: a file present at both
/// revisions is never reported, even when its content changed, and a rename
/// shows up only under its new name. Entries come back sorted ascending by
/// issue, with no duplicates. Any failure along the way aborts the whole
/// call; there are no partial results.
pub fn diff_with_source<S: RevisionSource>(
    source: &S,
    ref1: &str,
    ref2: &str,
    dir: &str,
) -> Result<Vec<Entry>> {
    let rev2 = source.resolve(ref2)?;
    let rev1 = if ref1 == NO_LOWER_BOUND {
        None
    } else {
        Some(source.resolve(ref1)?)
    };

    // All entries at the newer revision; the set at the older revision is
    // then subtracted to arrive at the candidates.
    let mut candidates: BTreeSet<String> = source.list_dir(rev2, dir)?.into_iter().collect();

    if let Some(rev1) = rev1 {
        for name in source.list_dir(rev1, dir)? {
            candidates.remove(&name);
        }
    }

    let mut entries = Vec::with_capacity(candidates.len());
    for name in candidates {
        let path = entry_path(dir, &name);
        let contents = source.read_file(rev2, &path)?;
        let last_change = source.last_commit_for_path(rev2, &path)?;
        entries.push(Entry {
            issue: name,
            body: String::from_utf8_lossy(&contents).into_owned(),
            date: last_change.date,
            hash: last_change.hash,
        });
    }

    entries.sort_by(|a, b| a.issue.cmp(&b.issue));
    Ok(entries)
}

fn entry_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
