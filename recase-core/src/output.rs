use crate::plan::{PlanResult, RenameOp};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rename operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub path: String,
    pub mode: String,
    pub renames: usize,
    pub skipped: usize,
    pub collisions: usize,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResult>,
}

/// Result of an undo operation
#[derive(Debug, Serialize, Deserialize)]
pub struct UndoResult {
    pub history_id: String,
    pub renames_reverted: usize,
    pub dry_run: bool,
    pub operations: Vec<RenameOp>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "path": self.path,
            "mode": self.mode,
            "dry_run": self.dry_run,
            "summary": {
                "renames": self.renames,
                "skipped": self.skipped,
                "collisions": self.collisions,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            if let Some(ref plan) = self.plan {
                for op in &plan.operations {
                    writeln!(
                        output,
                        "Would rename: {} -> {}",
                        op.old_path.display(),
                        op.new_path.display()
                    )
                    .unwrap();
                }
            }
            if self.renames == 0 {
                output.push_str("Dry run: nothing to rename\n");
            } else {
                writeln!(output, "Dry run: {} item(s) would be renamed", self.renames).unwrap();
            }
        } else if self.renames == 0 {
            output.push_str("✓ No files to rename\n");
        } else {
            writeln!(output, "✓ Renamed {} item(s)", self.renames).unwrap();
        }

        if self.skipped > 0 {
            writeln!(output, "Skipped {} item(s)", self.skipped).unwrap();
        }

        if self.collisions > 0 {
            writeln!(output, "⚠ {} collision(s):", self.collisions).unwrap();
            if let Some(ref plan) = self.plan {
                for collision in &plan.collisions {
                    writeln!(
                        output,
                        "  {} and {} both want {}",
                        collision.source1.display(),
                        collision.source2.display(),
                        collision.target.display()
                    )
                    .unwrap();
                }
            }
        }

        output
    }
}

impl OutputFormatter for UndoResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "undo",
            "history_id": self.history_id,
            "dry_run": self.dry_run,
            "summary": {
                "renames_reverted": self.renames_reverted,
            },
            "operations": self.operations,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            for op in &self.operations {
                writeln!(
                    output,
                    "Would rename: {} -> {}",
                    op.old_path.display(),
                    op.new_path.display()
                )
                .unwrap();
            }
            writeln!(
                output,
                "Dry run: {} rename(s) would be reverted",
                self.renames_reverted
            )
            .unwrap();
        } else {
            writeln!(output, "✓ Reverted {} rename(s)", self.renames_reverted).unwrap();
            writeln!(output, "Removed history entry {}", self.history_id).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
