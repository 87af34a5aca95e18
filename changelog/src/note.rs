use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Entry, Note};

/// Release-note block forms recognized inside an entry body, in priority
/// order: untyped fences first (both marker spellings), then typed fences.
/// Bodies are matched lazily so several independent blocks in one entry
/// yield one match each instead of a single merged match.
static NOTE_BODY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?ms)^```release-note\n(?P<note>.+?)\n```",
        r"(?ms)^```releasenote\n(?P<note>.+?)\n```",
        r"(?ms)^```release-note:(?P<type>[^\n]*)\n?(?P<note>.*?)\n?```",
        r"(?ms)^```releasenote:(?P<type>[^\n]*)\n?(?P<note>.*?)\n?```",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("note pattern must compile"))
    .collect()
});

/// Extract every release-note block embedded in an entry's body.
///
/// Every pattern is applied to the whole body, so a single entry may yield
/// several notes. A match whose type and note text are both empty after
/// trimming carries no information and is dropped. Infallible: a body with
/// no recognizable block simply yields an empty collection, and deciding
/// whether that is an error belongs to the caller.
///
/// The result is fully ordered by `(kind, issue, body)`, so identical input
/// always produces identical output.
pub fn notes_from_entry(entry: &Entry) -> Vec<Note> {
    let mut notes = Vec::new();

    for re in NOTE_BODY_PATTERNS.iter() {
        for caps in re.captures_iter(&entry.body) {
            let kind = caps.name("type").map_or("", |m| m.as_str()).trim();
            let body = caps.name("note").map_or("", |m| m.as_str()).trim();

            if kind.is_empty() && body.is_empty() {
                continue;
            }

            notes.push(Note {
                kind: kind.to_string(),
                body: body.to_string(),
                issue: entry.issue.clone(),
            });
        }
    }

    notes.sort_by(compare_notes);
    notes
}

/// Total order over notes: kind, then issue, then body, byte-lexicographic.
pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.issue.cmp(&b.issue))
        .then_with(|| a.body.cmp(&b.body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(issue: &str, body: &str) -> Entry {
        Entry::new(issue, body)
    }

    #[test]
    fn typed_block_yields_one_note() {
        let notes = notes_from_entry(&entry("1234", "```release-note:bug\nfixed the thing\n```"));
        assert_eq!(
            notes,
            vec![Note {
                kind: "bug".to_string(),
                body: "fixed the thing".to_string(),
                issue: "1234".to_string(),
            }]
        );
    }

    #[test]
    fn untyped_block_yields_note_with_empty_kind() {
        let notes = notes_from_entry(&entry("7", "```release-note\njust some text\n```"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, "");
        assert_eq!(notes[0].body, "just some text");
    }

    #[test]
    fn marker_spelling_without_hyphen_is_accepted() {
        let notes = notes_from_entry(&entry("7", "```releasenote\nno hyphen\n```"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body, "no hyphen");

        let notes = notes_from_entry(&entry("7", "```releasenote:feature\nshiny\n```"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, "feature");
        assert_eq!(notes[0].body, "shiny");
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let body = "This PR fixes a crash.\n\n```release-note:bug\nno longer crashes\n```\n\nSee #99.";
        let notes = notes_from_entry(&entry("100", body));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, "bug");
        assert_eq!(notes[0].body, "no longer crashes");
    }

    #[test]
    fn multiple_blocks_yield_multiple_notes() {
        let body = "```release-note:bug\nfixed a\n```\n\n```release-note:feature\nadded b\n```\n";
        let notes = notes_from_entry(&entry("55", body));
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].kind, "bug");
        assert_eq!(notes[0].body, "fixed a");
        assert_eq!(notes[1].kind, "feature");
        assert_eq!(notes[1].body, "added b");
    }

    #[test]
    fn repeated_untyped_blocks_are_not_merged() {
        let body = "```release-note\nfirst\n```\n\n```release-note\nsecond\n```\n";
        let notes = notes_from_entry(&entry("55", body));
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].body, "first");
        assert_eq!(notes[1].body, "second");
    }

    #[test]
    fn typed_block_with_empty_body_is_kept() {
        let notes = notes_from_entry(&entry("3", "```release-note:none\n```"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, "none");
        assert_eq!(notes[0].body, "");
    }

    #[test]
    fn empty_type_and_body_is_discarded() {
        let notes = notes_from_entry(&entry("3", "```release-note:\n```"));
        assert!(notes.is_empty());
    }

    #[test]
    fn type_and_body_are_trimmed() {
        let notes = notes_from_entry(&entry("3", "```release-note: bug \n  fixed it  \n```"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, "bug");
        assert_eq!(notes[0].body, "fixed it");
    }

    #[test]
    fn body_without_blocks_yields_nothing() {
        assert!(notes_from_entry(&entry("3", "no fenced blocks here")).is_empty());
        assert!(notes_from_entry(&entry("3", "")).is_empty());
    }

    #[test]
    fn notes_are_sorted_by_kind_then_issue_then_body() {
        let body = "```release-note:feature\nzzz\n```\n```release-note:bug\nbbb\n```\n```release-note:bug\naaa\n```\n";
        let notes = notes_from_entry(&entry("9", body));
        let keys: Vec<(&str, &str)> = notes.iter().map(|n| (n.kind.as_str(), n.body.as_str())).collect();
        assert_eq!(keys, vec![("bug", "aaa"), ("bug", "bbb"), ("feature", "zzz")]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let e = entry(
            "42",
            "```release-note:bug\nfix one\n```\n```release-note\nplain\n```\n",
        );
        let first = notes_from_entry(&e);
        let second = notes_from_entry(&e);
        assert_eq!(first, second);
    }
}
