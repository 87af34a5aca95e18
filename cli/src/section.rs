use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use changelog::SectionParser;

use crate::error::{CliError, Result};

pub fn execute(version: &str, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| {
        CliError::Io(e).with_context(format!("Failed to open changelog {}", path.display()))
    })?;

    let parser = SectionParser::new(file)?;
    let section = parser.section(version)?;

    io::stdout().write_all(section.body)?;
    Ok(())
}
