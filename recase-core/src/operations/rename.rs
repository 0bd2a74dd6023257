use crate::apply::apply_renames;
use crate::config::RenameOptions;
use crate::history::{HistoryEntry, HistoryStore};
use crate::output::RenameResult;
use crate::plan::{sort_paths_by_depth, PlanResult, Planner};
use crate::platform::platform_adapter;
use crate::walker::{collect_paths, WalkOptions};
use anyhow::{bail, Result};
use chrono::Utc;

/// Rename operation - equivalent to the `recase rename` command.
///
/// Walks the target, plans a collision-free batch, records the plan in the
/// history store (unless asked not to), then applies it. `command` is the
/// invocation string stored with the history entry.
pub fn rename_operation(options: &RenameOptions, command: &str) -> Result<RenameResult> {
    if !options.path.exists() {
        bail!("path does not exist: {}", options.path.display());
    }

    let mut paths = collect_paths(&walk_options(options))?;

    // Deepest first, so renaming a directory cannot invalidate the paths of
    // entries still to be renamed beneath it.
    if options.directories {
        sort_paths_by_depth(&mut paths);
    }

    let adapter = platform_adapter();
    let plan = Planner::new(options.mode, adapter.as_ref()).plan(&paths);

    if !options.skip_history {
        record_history(options, command, &plan);
    }

    apply_renames(&plan.operations, options.dry_run)?;

    Ok(RenameResult {
        path: options.path.display().to_string(),
        mode: options.mode.to_string(),
        renames: plan.operations.len(),
        skipped: plan.skipped.len(),
        collisions: plan.collisions.len(),
        dry_run: options.dry_run,
        plan: Some(plan),
    })
}

fn walk_options(options: &RenameOptions) -> WalkOptions {
    WalkOptions {
        path: options.path.clone(),
        recursive: options.recursive,
        files: options.files,
        directories: options.directories,
        ignore: options.ignore.clone(),
        no_default_ignore: options.no_default_ignore,
    }
}

// History must never block the rename itself, so every failure here is
// reported as a warning and swallowed.
fn record_history(options: &RenameOptions, command: &str, plan: &PlanResult) {
    let store = match HistoryStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("warning: history disabled: {e}");
            return;
        },
    };

    let entry = build_history_entry(&store, options, command, plan);
    if let Err(e) = store.save(&options.path, &entry) {
        eprintln!("warning: could not save history: {e}");
    }
}

fn build_history_entry(
    store: &HistoryStore,
    options: &RenameOptions,
    command: &str,
    plan: &PlanResult,
) -> HistoryEntry {
    let dir_id = store
        .dir_id_for(&options.path)
        .map(|id| id.to_string())
        .unwrap_or_default();

    HistoryEntry {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        path: options.path.clone(),
        dir_id,
        command: command.to_string(),
        config: serde_json::to_value(options).unwrap_or_default(),
        operations: plan.operations.clone(),
        skipped: plan.skipped.clone(),
        collisions: plan.collisions.clone(),
    }
}
