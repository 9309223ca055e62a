//! End-to-end scaffold generation.
//!
//! Runs the linear pipeline `config → plan → directories → files` and stops at
//! the first failure. A partially created tree is left on disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::config::ProjectConfig;
use crate::core::invariants::validate_plan;
use crate::core::plan::{FileSystemPlan, build_plan};
use crate::io::materialize::{materialize_directories, materialize_files};

/// Printed once on stdout after a successful run.
pub const SUCCESS_MESSAGE: &str = "FastAPI project structure created successfully!";

/// What a successful run put on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub root: PathBuf,
    pub directories: usize,
    pub files: usize,
}

/// Build the plan for `config` and check its invariants.
pub fn plan_project(config: &ProjectConfig) -> Result<FileSystemPlan> {
    let plan = build_plan(config).context("build scaffold plan")?;
    let errors = validate_plan(&plan);
    if !errors.is_empty() {
        bail!("invalid scaffold plan:\n- {}", errors.join("\n- "));
    }
    debug!(
        directories = plan.directories.len(),
        files = plan.files.len(),
        "plan built"
    );
    Ok(plan)
}

/// Generate the scaffold for `config` under `base`.
///
/// Filesystem failures surface as [`crate::io::error::FilesystemError`]
/// inside the returned error.
pub fn generate(base: &Path, config: &ProjectConfig) -> Result<GenerateOutcome> {
    debug!(name = %config.name, include_auth = config.include_auth, "config resolved");
    let plan = plan_project(config)?;

    let directories = materialize_directories(base, &plan)?;
    debug!(directories, "directories created");

    let files = materialize_files(base, &plan)?;
    debug!(files, "files created");

    let root = base.join(&config.name);
    info!(root = %root.display(), "scaffold generated");
    Ok(GenerateOutcome {
        root,
        directories,
        files,
    })
}
