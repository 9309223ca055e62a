//! The one error kind raised while materializing a scaffold.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which filesystem operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    CreateDirectory,
    WriteFile,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsOp::CreateDirectory => f.write_str("create directory"),
            FsOp::WriteFile => f.write_str("write file"),
        }
    }
}

/// A directory or file could not be created.
///
/// Fatal: callers stop at the first one and do not roll back.
#[derive(Debug, Error)]
#[error("{op} {}", .path.display())]
pub struct FilesystemError {
    pub op: FsOp,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FilesystemError {
    pub fn new(op: FsOp, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}
