use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Directory names nobody wants batch-renamed, skipped unless
/// `no_default_ignore` is set.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "vendor",
    "dist",
    "build",
    "target",
    "__pycache__",
    ".cache",
    ".venv",
    "venv",
    ".DS_Store",
    "Thumbs.db",
];

#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    pub path: PathBuf,
    pub recursive: bool,
    pub files: bool,
    pub directories: bool,
    pub ignore: Vec<String>,
    pub no_default_ignore: bool,
}

/// Gather the rename candidates under `options.path`.
///
/// A path naming a file stands for itself (when files are wanted). For a
/// directory, the walk yields entries below it, never the root itself, one
/// level deep unless recursive. Ignore globs match entry names; a matching
/// directory is not descended into. Directories are only candidates in a
/// recursive walk.
pub fn collect_paths(options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(&options.path)
        .with_context(|| format!("failed to access {}", options.path.display()))?;

    if !meta.is_dir() {
        if options.files {
            return Ok(vec![options.path.clone()]);
        }
        return Ok(Vec::new());
    }

    let ignore_set = build_ignore_set(&options.ignore, options.no_default_ignore)?;

    let mut builder = WalkBuilder::new(&options.path);
    builder
        .standard_filters(false)
        .sort_by_file_name(std::cmp::Ord::cmp);
    if !options.recursive {
        builder.max_depth(Some(1));
    }
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        match entry.file_name().to_str() {
            Some(name) => !ignore_set.is_match(name),
            None => true,
        }
    });

    let mut paths = Vec::new();
    for result in builder.build() {
        let entry = result.context("failed to read directory entry")?;
        if entry.depth() == 0 {
            continue;
        }

        let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
        if is_dir {
            if options.directories && options.recursive {
                paths.push(entry.into_path());
            }
        } else if options.files {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

fn build_ignore_set(user: &[String], no_default_ignore: bool) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    if !no_default_ignore {
        for pattern in DEFAULT_IGNORE_PATTERNS {
            builder.add(Glob::new(pattern)?);
        }
    }
    for pattern in user {
        builder.add(
            Glob::new(pattern).with_context(|| format!("invalid ignore pattern '{}'", pattern))?,
        );
    }

    builder.build().context("failed to compile ignore patterns")
}
