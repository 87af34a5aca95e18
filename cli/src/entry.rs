use std::fs;
use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::error::{CliError, Result};
use crate::note_types;
use crate::ui;

/// Default entry template; placeholders are `{type}`, `{subcategory}`,
/// `{description}` and `{pr}`.
const DEFAULT_ENTRY_TEMPLATE: &str = "```release-note:{type}\n{description}\n```\n";

pub fn execute(
    pr: u64,
    change_type: Option<String>,
    description: Option<String>,
    subcategory: Option<String>,
    dir: PathBuf,
    template: Option<PathBuf>,
) -> Result<()> {
    let change_type = match change_type {
        Some(kind) if note_types::valid(&kind) => kind,
        Some(kind) => return Err(CliError::InvalidNoteType(kind)),
        None => prompt_change_type()?,
    };

    let description = match description {
        Some(text) => text,
        None => Input::<String>::new()
            .with_prompt("Description")
            .interact_text()?,
    };

    let subcategory = subcategory.unwrap_or_default();

    let template_text = match template {
        Some(path) => fs::read_to_string(&path).map_err(|e| {
            CliError::Io(e).with_context(format!("Failed to read template {}", path.display()))
        })?,
        None => DEFAULT_ENTRY_TEMPLATE.to_string(),
    };

    let rendered = render(&template_text, &change_type, &subcategory, &description, pr);

    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{pr}.txt"));
    fs::write(&path, &rendered)?;

    println!("\n{rendered}");
    ui::success_message(&format!("Wrote changelog entry to {}", path.display()));
    Ok(())
}

fn prompt_change_type() -> Result<String> {
    let index = Select::new()
        .with_prompt("Select a change type")
        .items(note_types::TYPE_VALUES)
        .default(0)
        .interact()?;
    Ok(note_types::TYPE_VALUES[index].to_string())
}

fn render(template: &str, kind: &str, subcategory: &str, description: &str, pr: u64) -> String {
    template
        .replace("{type}", kind)
        .replace("{subcategory}", subcategory)
        .replace("{description}", description)
        .replace("{pr}", &pr.to_string())
}
