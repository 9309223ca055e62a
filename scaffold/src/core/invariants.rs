//! Structural invariants of a [`FileSystemPlan`].

use std::collections::HashSet;
use std::path::Path;

use super::plan::FileSystemPlan;

/// Check plan invariants before anything is materialized:
/// - No duplicate directories or files
/// - No path planned as both a directory and a file
/// - Every file's parent directory is planned
pub fn validate_plan(plan: &FileSystemPlan) -> Vec<String> {
    let mut errors = Vec::new();

    let mut dirs: HashSet<&Path> = HashSet::new();
    for dir in &plan.directories {
        if !dirs.insert(dir.as_path()) {
            errors.push(format!("duplicate directory {}", dir.display()));
        }
    }

    let mut files: HashSet<&Path> = HashSet::new();
    for file in &plan.files {
        let path = file.path.as_path();
        if !files.insert(path) {
            errors.push(format!("duplicate file {}", path.display()));
        }
        if dirs.contains(path) {
            errors.push(format!("{} is planned as both directory and file", path.display()));
        }
        match path.parent() {
            Some(parent) if dirs.contains(parent) => {}
            Some(parent) => errors.push(format!(
                "{}: parent directory {} is not planned",
                path.display(),
                parent.display()
            )),
            None => errors.push(format!("{}: file has no parent directory", path.display())),
        }
    }

    errors
}
