#![allow(unused)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod case_model;
pub mod config;
pub mod history;
pub mod operations;
pub mod output;
pub mod plan;
pub mod platform;
pub mod walker;

pub use apply::apply_renames;
pub use case_model::{split_words, Style};
pub use config::RenameOptions;
pub use history::{HistoryEntry, HistoryError, HistoryStore};
pub use operations::{rename_operation, undo_operation, version_operation};
pub use output::{OutputFormat, OutputFormatter, RenameResult, UndoResult, VersionResult};
pub use plan::{
    path_depth, sort_paths_by_depth, Collision, PlanResult, Planner, RenameOp, SkipReason,
    SkippedFile,
};
pub use platform::{platform_adapter, DirId, FsIdentifier, NamingAdapter, PathIdentifier};
pub use walker::{collect_paths, WalkOptions, DEFAULT_IGNORE_PATTERNS};
