use crate::case_model::Style;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything one rename invocation was asked to do.
///
/// A snapshot of this struct is embedded in every history entry, so renames
/// can be audited later with the flags that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOptions {
    pub path: PathBuf,
    pub mode: Style,
    pub recursive: bool,
    pub directories: bool,
    pub files: bool,
    pub ignore: Vec<String>,
    pub no_default_ignore: bool,
    pub dry_run: bool,
    pub skip_history: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            mode: Style::Lower,
            recursive: false,
            directories: false,
            files: true,
            ignore: Vec::new(),
            no_default_ignore: false,
            dry_run: false,
            skip_history: false,
        }
    }
}
