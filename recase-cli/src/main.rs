use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use recase_core::{version_operation, OutputFormatter};
use std::io;
use std::process;

mod cli;
mod rename;
mod undo;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rename {
            path,
            mode,
            recursive,
            directories,
            dirs_only,
            ignore,
            no_default_ignore,
            dry_run,
            skip_history,
            output,
        } => rename::handle_rename(
            path,
            mode,
            recursive,
            directories,
            dirs_only,
            ignore,
            no_default_ignore,
            dry_run,
            skip_history,
            output,
            cli.quiet,
            cli.verbose,
        ),

        Commands::Undo {
            path,
            dry_run,
            output,
        } => undo::handle_undo(&path, dry_run, output, cli.quiet),

        Commands::Version { output } => handle_version(output),

        Commands::Completions { shell } => handle_completions(shell),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

// 2 means the user handed us something unusable, everything else is 1
fn exit_code_for(e: &anyhow::Error) -> i32 {
    let msg = e.to_string();
    if msg.contains("does not exist") || msg.contains("invalid") {
        2
    } else {
        1
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let result = version_operation();

    let formatted = match output {
        OutputFormat::Json => result.format_json(),
        OutputFormat::Summary => result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}

fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "recase", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_cli_args_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_code_for_bad_input() {
        assert_eq!(exit_code_for(&anyhow!("path does not exist: /x")), 2);
        assert_eq!(exit_code_for(&anyhow!("invalid ignore pattern '['")), 2);
    }

    #[test]
    fn test_exit_code_for_other_failures() {
        assert_eq!(exit_code_for(&anyhow!("no rename history found for .")), 1);
    }
}
