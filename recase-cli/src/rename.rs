use anyhow::Result;
use recase_core::{rename_operation, OutputFormatter, RenameOptions};
use std::path::PathBuf;

use crate::cli::{ModeArg, OutputFormat};

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn handle_rename(
    path: PathBuf,
    mode: ModeArg,
    recursive: bool,
    directories: bool,
    dirs_only: bool,
    ignore: Vec<String>,
    no_default_ignore: bool,
    dry_run: bool,
    skip_history: bool,
    output: OutputFormat,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let options = RenameOptions {
        path,
        mode: mode.into(),
        recursive,
        // -D means directories without files
        directories: directories || dirs_only,
        files: !dirs_only,
        ignore,
        no_default_ignore,
        dry_run,
        skip_history,
    };

    let command = std::env::args().collect::<Vec<_>>().join(" ");
    let result = rename_operation(&options, &command)?;

    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            // Verbose echoes only renames that actually happened; dry-run
            // previews come from the formatter.
            if verbose && !result.dry_run {
                if let Some(ref plan) = result.plan {
                    for op in &plan.operations {
                        println!(
                            "Renamed: {} -> {}",
                            op.old_path.display(),
                            op.new_path.display()
                        );
                    }
                }
            }
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
