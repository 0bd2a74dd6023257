use anyhow::Result;
use recase_core::{undo_operation, OutputFormatter};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_undo(path: &Path, dry_run: bool, output: OutputFormat, quiet: bool) -> Result<()> {
    let result = undo_operation(path, dry_run)?;

    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
