use crate::plan::{path_depth, Collision, RenameOp, SkippedFile};
use crate::platform::{DirId, FsIdentifier, PathIdentifier};
use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

const HISTORY_SUBDIR: &str = "history";

/// How many entries a directory's bucket keeps. Older entries are pruned
/// after every save.
const RETENTION_LIMIT: usize = 2;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no history found")]
    NoHistory,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One recorded batch, written after planning and consumed by undo.
///
/// Older files may lack newer fields, so everything that can reasonably be
/// defaulted is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default)]
    pub dir_id: String,
    pub command: String,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub operations: Vec<RenameOp>,
    #[serde(default)]
    pub skipped: Vec<SkippedFile>,
    #[serde(default)]
    pub collisions: Vec<Collision>,
}

/// Per-directory rename history, stored under the user config directory and
/// keyed by the directory's filesystem identity rather than its path, so the
/// records survive the directory itself being renamed.
pub struct HistoryStore {
    config_dir: PathBuf,
    identifier: Box<dyn PathIdentifier>,
}

impl HistoryStore {
    pub fn new() -> Result<Self, HistoryError> {
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow!("could not determine the user config directory"))?;
        Ok(Self::with_root(base.join("recase"), Box::new(FsIdentifier)))
    }

    /// Store rooted at an explicit directory, with an injectable identity
    /// resolver.
    pub fn with_root(config_dir: PathBuf, identifier: Box<dyn PathIdentifier>) -> Self {
        Self {
            config_dir,
            identifier,
        }
    }

    /// Write `entry` into the bucket for `dir_path` and prune the bucket down
    /// to the retention limit. Returns the entry's file name. Pruning is best
    /// effort: its failure is reported on stderr, never propagated.
    pub fn save(&self, dir_path: &Path, entry: &HistoryEntry) -> Result<String, HistoryError> {
        let bucket = self.bucket_for(dir_path)?;
        fs::create_dir_all(&bucket)
            .with_context(|| format!("failed to create history directory {}", bucket.display()))?;

        let file_name = format!("{}.json", entry.timestamp.format("%Y-%m-%d_%H%M%S"));
        let path = bucket.join(&file_name);

        let file = File::create(&path)
            .with_context(|| format!("failed to create history file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), entry)
            .with_context(|| format!("failed to write history file {}", path.display()))?;

        if let Err(e) = cleanup(&bucket) {
            eprintln!("warning: failed to prune history in {}: {}", bucket.display(), e);
        }

        Ok(file_name)
    }

    /// The most recent entry for `dir_path`, with its operations re-sorted
    /// shallowest first, the order a reversal must run in.
    pub fn latest(&self, dir_path: &Path) -> Result<HistoryEntry, HistoryError> {
        let bucket = self.bucket_for(dir_path)?;
        let file_name = latest_file(&bucket)?;
        load_entry(&bucket.join(file_name))
    }

    /// Remove the most recent entry for `dir_path`.
    pub fn delete(&self, dir_path: &Path) -> Result<(), HistoryError> {
        let bucket = self.bucket_for(dir_path)?;
        let file_name = latest_file(&bucket)?;
        let path = bucket.join(file_name);
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove history file {}", path.display()))?;
        Ok(())
    }

    /// The filesystem identity token for `dir_path`, the value saved entries
    /// carry in their `dir_id` field. A file path resolves to its parent
    /// directory's identity.
    pub fn dir_id_for(&self, dir_path: &Path) -> Result<DirId, HistoryError> {
        let absolute = absolutize(dir_path)?;
        let target = if absolute.is_file() {
            match absolute.parent() {
                Some(parent) => parent.to_path_buf(),
                None => absolute,
            }
        } else {
            absolute
        };

        let dir_id = self.identifier.identify(&target).with_context(|| {
            format!("failed to resolve directory identity for {}", target.display())
        })?;

        Ok(dir_id)
    }

    fn bucket_for(&self, dir_path: &Path) -> Result<PathBuf, HistoryError> {
        let dir_id = self.dir_id_for(dir_path)?;
        Ok(self.dir_history_path(dir_id.as_str()))
    }

    fn dir_history_path(&self, dir_id: &str) -> PathBuf {
        self.config_dir
            .join(HISTORY_SUBDIR)
            .join(sanitize_dir_id(dir_id))
    }
}

fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(cwd.join(path))
    }
}

// Colons appear in identity tokens (dev:ino, volume:index) and in drive
// prefixes, and are not valid in a bucket name everywhere.
fn sanitize_dir_id(dir_id: &str) -> String {
    dir_id.replace(':', "_")
}

fn latest_file(bucket: &Path) -> Result<String, HistoryError> {
    if !bucket.exists() {
        return Err(HistoryError::NoHistory);
    }

    let mut files = list_entry_files(bucket)?;
    files.sort();
    files.pop().ok_or(HistoryError::NoHistory)
}

// Entry file names are timestamps, so lexicographic order is age order.
fn list_entry_files(bucket: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();

    let entries = fs::read_dir(bucket)
        .with_context(|| format!("failed to read history directory {}", bucket.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read history directory {}", bucket.display()))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if let Some(name) = entry.file_name().to_str() {
            if is_file && name.ends_with(".json") {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}

fn cleanup(bucket: &Path) -> anyhow::Result<()> {
    let mut files = list_entry_files(bucket)?;
    if files.len() <= RETENTION_LIMIT {
        return Ok(());
    }

    files.sort();
    let excess = files.len() - RETENTION_LIMIT;
    for name in files.into_iter().take(excess) {
        let path = bucket.join(&name);
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
    }

    Ok(())
}

fn load_entry(path: &Path) -> Result<HistoryEntry, HistoryError> {
    let file = File::open(path)
        .with_context(|| format!("failed to open history file {}", path.display()))?;
    let mut entry: HistoryEntry = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse history file {}", path.display()))?;

    entry.operations.sort_by_key(|op| path_depth(&op.old_path));

    Ok(entry)
}
