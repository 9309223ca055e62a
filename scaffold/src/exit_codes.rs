//! Stable exit codes for the scaffold CLI.

/// Scaffold generated (or plan printed with `--dry-run`).
pub const OK: i32 = 0;
/// A directory or file could not be created, or the plan was rejected.
pub const FAILED: i32 = 1;
