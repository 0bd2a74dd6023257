use crate::output::VersionResult;

/// Version operation - equivalent to the `recase version` command.
pub fn version_operation() -> VersionResult {
    VersionResult {
        name: "recase".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
