use std::fs;
use std::path::{Path, PathBuf};

use changelog::{Entry, notes_from_entry};

use crate::error::{CliError, Result};
use crate::note_types;
use crate::ui;

pub fn execute(file: PathBuf) -> Result<()> {
    let body = fs::read_to_string(&file).map_err(|e| {
        CliError::Io(e).with_context(format!("Failed to read entry file {}", file.display()))
    })?;

    let entry = Entry::new(issue_from_path(&file), body);
    let notes = notes_from_entry(&entry);

    if notes.is_empty() {
        return Err(CliError::NoNotesFound(entry.issue));
    }

    for note in &notes {
        if !note_types::valid(&note.kind) {
            return Err(CliError::InvalidNoteType(note.kind.clone()));
        }
    }

    ui::success_message(&format!(
        "{}: {} valid release note(s)",
        entry.issue,
        notes.len()
    ));
    Ok(())
}

// "1234.txt" carries the issue identifier "1234"
fn issue_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
