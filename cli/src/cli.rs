use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "changelog-tool")]
#[command(
    author,
    version,
    about = "Collect, validate and diff per-change changelog entries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a changelog entry file for a pull request
    Entry {
        /// Pull request number the entry belongs to
        #[clap(short, long)]
        pr: u64,

        /// The type of change (prompted interactively when omitted)
        #[clap(short = 't', long = "type")]
        change_type: Option<String>,

        /// The release note text (prompted interactively when omitted)
        #[clap(short, long)]
        description: Option<String>,

        /// Service or area of the codebase the change touches (optional)
        #[clap(short, long)]
        subcategory: Option<String>,

        /// Directory the entry file is written to
        #[clap(long, default_value = ".changelog")]
        dir: PathBuf,

        /// Path to a custom entry template
        #[clap(long)]
        template: Option<PathBuf>,
    },

    /// Validate the release notes embedded in an entry file
    Check {
        /// Entry file to check
        file: PathBuf,
    },

    /// Print one version's section from an assembled changelog document
    Section {
        /// Version label to look up (e.g. 1.0.0)
        version: String,

        /// Path to the changelog document
        #[clap(long, default_value = "CHANGELOG.md")]
        path: PathBuf,
    },

    /// List the entry files added between two revisions
    Diff {
        /// Repository URL, or a local path when --local is set
        repo: String,

        /// Older revision, or "-" for no lower bound
        ref1: String,

        /// Newer revision
        ref2: String,

        /// Entry directory inside the repository
        #[clap(long, default_value = ".changelog")]
        dir: String,

        /// Treat the repository argument as an existing local checkout
        #[clap(long, default_value_t = false)]
        local: bool,

        /// Also print the notes extracted from each entry
        #[clap(long, default_value_t = false)]
        notes: bool,
    },
}
