use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::{ModeArg, OutputFormat};

/// Fast, collision-safe batch case renaming for files and directories
#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress the summary output (errors still print)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print each completed rename
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename files and directories into a target naming style
    Rename {
        /// Path to a directory or file
        #[arg(short = 'p', long, default_value = ".")]
        path: PathBuf,

        /// Target naming style
        #[arg(short = 'm', long, value_enum)]
        mode: ModeArg,

        /// Recurse into subdirectories
        #[arg(short = 'r', long)]
        recursive: bool,

        /// Include directories in the rename
        #[arg(short = 'd', long)]
        directories: bool,

        /// Rename only directories, skip files
        #[arg(short = 'D', long = "dirs-only")]
        dirs_only: bool,

        /// Glob pattern to ignore (can be specified multiple times)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Disable the default ignore patterns (.git, node_modules, ...)
        #[arg(long)]
        no_default_ignore: bool,

        /// Show what would be renamed without actually renaming
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Do not record this batch in the undo history
        #[arg(long)]
        skip_history: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Undo the most recent recorded rename batch
    Undo {
        /// Path the batch was recorded for
        #[arg(short = 'p', long, default_value = ".")]
        path: PathBuf,

        /// Show what would be reverted without actually renaming
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
