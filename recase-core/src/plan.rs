use crate::case_model::Style;
use crate::platform::NamingAdapter;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOp {
    #[serde(rename = "old")]
    pub old_path: PathBuf,
    #[serde(rename = "new")]
    pub new_path: PathBuf,
}

/// Why an input path produced no operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    #[serde(rename = "no change")]
    NoChange,
    #[serde(rename = "target already exists")]
    TargetExists,
    #[serde(rename = "duplicate target in batch")]
    DuplicateTarget,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoChange => "no change",
            Self::TargetExists => "target already exists",
            Self::DuplicateTarget => "duplicate target in batch",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Two sources wanting the same target. Reporting detail only; the skipped
/// entry is what keeps the batch safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub source1: PathBuf,
    pub source2: PathBuf,
    pub target: PathBuf,
}

/// Outcome of planning a batch. Every input path lands in exactly one of
/// `operations` or `skipped`; `collisions` carries extra detail for the
/// skips caused by target conflicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanResult {
    pub operations: Vec<RenameOp>,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
}

/// Plans collision-free batches of case renames.
///
/// Planning never fails: unworkable inputs become skipped entries, and the
/// actual filesystem changes are left entirely to the caller.
pub struct Planner<'a> {
    adapter: &'a dyn NamingAdapter,
    style: Style,
}

impl<'a> Planner<'a> {
    pub fn new(style: Style, adapter: &'a dyn NamingAdapter) -> Self {
        Self { adapter, style }
    }

    pub fn plan(&self, paths: &[PathBuf]) -> PlanResult {
        let mut result = PlanResult::default();
        let case_sensitive = self.adapter.is_case_sensitive();

        struct PendingOp {
            old_path: PathBuf,
            new_path: PathBuf,
            new_key: String,
        }

        let mut pending: Vec<PendingOp> = Vec::new();
        let mut being_renamed: HashSet<String> = HashSet::with_capacity(paths.len());

        for path in paths {
            let new_path = self.compute_new_path(path);

            if new_path == *path {
                result.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: SkipReason::NoChange,
                });
                continue;
            }

            let new_key = compare_key(&new_path, case_sensitive);
            being_renamed.insert(compare_key(path, case_sensitive));
            pending.push(PendingOp {
                old_path: path.clone(),
                new_path,
                new_key,
            });
        }

        // Targets claimed so far in this batch, keyed like `being_renamed`.
        let mut seen: HashMap<String, PathBuf> = HashMap::with_capacity(pending.len());

        for op in pending {
            if has_disk_collision(&op.new_path, &op.new_key, &being_renamed) {
                result.skipped.push(SkippedFile {
                    path: op.old_path.clone(),
                    reason: SkipReason::TargetExists,
                });
                result.collisions.push(Collision {
                    source1: op.new_path.clone(),
                    source2: op.old_path,
                    target: op.new_path,
                });
                continue;
            }

            if let Some(existing_source) = seen.get(&op.new_key) {
                result.skipped.push(SkippedFile {
                    path: op.old_path.clone(),
                    reason: SkipReason::DuplicateTarget,
                });
                result.collisions.push(Collision {
                    source1: existing_source.clone(),
                    source2: op.old_path,
                    target: op.new_path,
                });
                continue;
            }

            seen.insert(op.new_key, op.old_path.clone());
            result.operations.push(RenameOp {
                old_path: op.old_path,
                new_path: op.new_path,
            });
        }

        result
    }

    fn compute_new_path(&self, path: &Path) -> PathBuf {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => return path.to_path_buf(),
        };

        // The extension runs from the last dot and is never transformed. A
        // name whose only dot leads (".gitignore") is all extension, so bare
        // dotfiles pass through unchanged.
        let (base, ext) = match name.rfind('.') {
            Some(idx) => name.split_at(idx),
            None => (name, ""),
        };

        let transformed = self.adapter.sanitize_name(&self.style.transform(base));
        let new_name = format!("{}{}", transformed, ext);

        match path.parent() {
            Some(dir) => dir.join(new_name),
            None => PathBuf::from(new_name),
        }
    }
}

/// Key under which paths are compared for collisions: lowercased when the
/// filesystem does not distinguish case, byte-exact when it does.
fn compare_key(path: &Path, case_sensitive: bool) -> String {
    let key = path.to_string_lossy();
    if case_sensitive {
        key.into_owned()
    } else {
        key.to_lowercase()
    }
}

// A target that exists on disk only blocks the rename if no path in this
// batch is vacating that name. The exception is what lets case-only renames
// on case-insensitive filesystems (where the target "exists" because it is
// the source) go through.
fn has_disk_collision(target: &Path, target_key: &str, being_renamed: &HashSet<String>) -> bool {
    target.exists() && !being_renamed.contains(target_key)
}

pub fn path_depth(path: &Path) -> usize {
    path.components().count()
}

/// Order paths deepest first (stable), so a directory's contents are planned
/// under its current name before the directory's own rename is.
pub fn sort_paths_by_depth(paths: &mut [PathBuf]) {
    paths.sort_by_key(|p| std::cmp::Reverse(path_depth(p)));
}
