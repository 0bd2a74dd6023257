use crate::plan::RenameOp;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Carry out planned renames in order, stopping at the first failure.
/// Already-applied renames stay applied; the history entry saved before the
/// apply describes the full batch either way.
///
/// A dry run performs no filesystem calls and prints nothing; preview lines
/// are rendered by the output formatters.
pub fn apply_renames(ops: &[RenameOp], dry_run: bool) -> Result<()> {
    if dry_run {
        return Ok(());
    }

    for op in ops {
        rename(&op.old_path, &op.new_path)?;
    }

    Ok(())
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    let case_only = from != to
        && from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase();

    if case_only {
        // A case-only rename can no-op on case-insensitive filesystems, so
        // hop through a temp name.
        let temp = to.with_extension(format!("{}.recase.tmp", std::process::id()));
        fs::rename(from, &temp).with_context(|| {
            format!("failed to rename {} to {}", from.display(), temp.display())
        })?;
        fs::rename(&temp, to).with_context(|| {
            format!("failed to rename {} to {}", temp.display(), to.display())
        })?;
        return Ok(());
    }

    fs::rename(from, to)
        .with_context(|| format!("failed to rename {} to {}", from.display(), to.display()))
}
