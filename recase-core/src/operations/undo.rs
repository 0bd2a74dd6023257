use crate::apply::apply_renames;
use crate::history::{HistoryError, HistoryStore};
use crate::output::UndoResult;
use crate::plan::RenameOp;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Undo operation - equivalent to the `recase undo` command.
///
/// Reverts the most recent recorded rename batch for `path` and, unless this
/// is a dry run, removes the consumed history entry.
pub fn undo_operation(path: &Path, dry_run: bool) -> Result<UndoResult> {
    let store = HistoryStore::new()?;

    let entry = match store.latest(path) {
        Ok(entry) => entry,
        Err(HistoryError::NoHistory) => {
            return Err(anyhow!("no rename history found for {}", path.display()))
        },
        Err(e) => return Err(e.into()),
    };

    let reversed = reverse_operations(&entry.operations);
    apply_renames(&reversed, dry_run)?;

    let history_id = entry.timestamp.format("%Y-%m-%d_%H%M%S").to_string();

    if !dry_run {
        store.delete(path)?;
    }

    Ok(UndoResult {
        history_id,
        renames_reverted: reversed.len(),
        dry_run,
        operations: reversed,
    })
}

// The loaded entry is sorted shallowest first, and the swap must keep that
// order: ancestors get their old names back before the recorded paths of
// their children are touched.
fn reverse_operations(operations: &[RenameOp]) -> Vec<RenameOp> {
    operations
        .iter()
        .map(|op| RenameOp {
            old_path: op.new_path.clone(),
            new_path: op.old_path.clone(),
        })
        .collect()
}
