//! Test-only helpers for generating into and inspecting temp directories.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Temporary base directory, removed on drop.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Every directory and file under a root, keyed by `/`-joined relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub directories: BTreeSet<String>,
    pub files: BTreeMap<String, Vec<u8>>,
}

impl TreeSnapshot {
    /// Relative file paths in sorted order.
    pub fn file_paths(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Relative directory paths in sorted order.
    pub fn directory_paths(&self) -> Vec<&str> {
        self.directories.iter().map(String::as_str).collect()
    }

    pub fn file_text(&self, path: &str) -> Option<String> {
        self.files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Walk `root` recursively and capture its layout and file contents.
pub fn snapshot(root: &Path) -> Result<TreeSnapshot> {
    let mut snap = TreeSnapshot::default();
    walk(root, PathBuf::new(), &mut snap)?;
    Ok(snap)
}

fn walk(dir: &Path, rel: PathBuf, snap: &mut TreeSnapshot) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        let rel_path = rel.join(entry.file_name());
        let key = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let path = entry.path();
        if path.is_dir() {
            snap.directories.insert(key);
            walk(&path, rel_path, snap)?;
        } else {
            let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            snap.files.insert(key, bytes);
        }
    }
    Ok(())
}
