mod check;
mod cli;
mod diff;
mod entry;
mod error;
mod note_types;
mod section;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Entry {
            pr,
            change_type,
            description,
            subcategory,
            dir,
            template,
        } => entry::execute(pr, change_type, description, subcategory, dir, template),
        Commands::Check { file } => check::execute(file),
        Commands::Section { version, path } => section::execute(&version, &path),
        Commands::Diff {
            repo,
            ref1,
            ref2,
            dir,
            local,
            notes,
        } => diff::execute(&repo, &ref1, &ref2, &dir, local, notes),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
