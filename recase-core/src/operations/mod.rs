//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each recase operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;
pub mod undo;
pub mod version;

// Re-export the main operation functions for easy access
pub use rename::rename_operation;
pub use undo::undo_operation;
pub use version::version_operation;
