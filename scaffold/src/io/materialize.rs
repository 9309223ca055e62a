//! Filesystem side effects for a [`FileSystemPlan`].
//!
//! Both operations walk the plan in order and stop at the first failure.
//! Nothing already created is removed.

use std::fs;
use std::path::Path;

use tracing::trace;

use super::error::{FilesystemError, FsOp};
use crate::core::plan::FileSystemPlan;

/// Create every planned directory (and missing ancestors) under `base`.
///
/// Existing directories are left as they are. Returns the number created or
/// confirmed.
pub fn materialize_directories(
    base: &Path,
    plan: &FileSystemPlan,
) -> Result<usize, FilesystemError> {
    for dir in &plan.directories {
        create_dir(&base.join(dir))?;
    }
    Ok(plan.directories.len())
}

/// Write every planned file under `base`, truncating existing files.
///
/// Parent directories must already exist. Returns the number written.
pub fn materialize_files(base: &Path, plan: &FileSystemPlan) -> Result<usize, FilesystemError> {
    for file in &plan.files {
        write_file(&base.join(&file.path), &file.contents)?;
    }
    Ok(plan.files.len())
}

fn create_dir(path: &Path) -> Result<(), FilesystemError> {
    fs::create_dir_all(path)
        .map_err(|err| FilesystemError::new(FsOp::CreateDirectory, path, err))?;
    trace!(path = %path.display(), "directory ready");
    Ok(())
}

// `fs::write` opens, writes and closes the handle before returning, on the
// error path too.
fn write_file(path: &Path, contents: &str) -> Result<(), FilesystemError> {
    fs::write(path, contents).map_err(|err| FilesystemError::new(FsOp::WriteFile, path, err))?;
    trace!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}
