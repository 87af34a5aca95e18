use changelog::notes_from_entry;
use colored::Colorize;

use crate::error::Result;
use crate::ui;

pub fn execute(
    repo: &str,
    ref1: &str,
    ref2: &str,
    dir: &str,
    local: bool,
    show_notes: bool,
) -> Result<()> {
    let entries = if local {
        changelog::diff_local(repo, ref1, ref2, dir)?
    } else {
        changelog::diff(repo, ref1, ref2, dir)?
    };

    if entries.is_empty() {
        ui::info_message(&format!(
            "No new changelog entries in {dir} between {ref1} and {ref2}"
        ));
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{} {} {}",
            short_hash(&entry.hash).yellow(),
            entry.date.format("%Y-%m-%d"),
            entry.issue.bold()
        );
        if show_notes {
            for note in notes_from_entry(entry) {
                let kind = if note.kind.is_empty() {
                    "untyped"
                } else {
                    note.kind.as_str()
                };
                println!("  [{}] {}", kind.cyan(), note.body);
            }
        }
    }
    Ok(())
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(8)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hash_truncates_long_hashes_only() {
        assert_eq!(short_hash("0123456789abcdef"), "01234567");
        assert_eq!(short_hash("abc"), "abc");
    }
}
