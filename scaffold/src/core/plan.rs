//! Deterministic scaffold plan derived from a [`ProjectConfig`].
//!
//! The plan lists every directory and file (with contents) before any
//! filesystem side effect happens. Paths are relative to the base directory
//! the plan is later materialized into.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use super::config::ProjectConfig;
use super::templates::{
    AUTH_ROUTE_PY, GITIGNORE, MAIN_PY, PACKAGE_INIT_PY, REQUIREMENTS_TXT, USER_MODEL_PY,
    USERS_ROUTE_PY, render_readme,
};

/// All canonical paths of a scaffold rooted at `root`.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub app_dir: PathBuf,
    pub routes_dir: PathBuf,
    pub models_dir: PathBuf,
    pub auth_dir: PathBuf,
    pub main_path: PathBuf,
    pub routes_init_path: PathBuf,
    pub users_route_path: PathBuf,
    pub models_init_path: PathBuf,
    pub user_model_path: PathBuf,
    pub auth_init_path: PathBuf,
    pub auth_route_path: PathBuf,
    pub requirements_path: PathBuf,
    pub gitignore_path: PathBuf,
    pub readme_path: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let app_dir = root.join("app");
        let routes_dir = app_dir.join("routes");
        let models_dir = app_dir.join("models");
        let auth_dir = app_dir.join("auth");
        Self {
            main_path: root.join("main.py"),
            routes_init_path: routes_dir.join("__init__.py"),
            users_route_path: routes_dir.join("users.py"),
            models_init_path: models_dir.join("__init__.py"),
            user_model_path: models_dir.join("user.py"),
            auth_init_path: auth_dir.join("__init__.py"),
            auth_route_path: auth_dir.join("auth.py"),
            requirements_path: root.join("requirements.txt"),
            gitignore_path: root.join(".gitignore"),
            readme_path: root.join("README.md"),
            root,
            app_dir,
            routes_dir,
            models_dir,
            auth_dir,
        }
    }
}

/// A file to write, with its full contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Ordered directories and files making up one scaffold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSystemPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl FileSystemPlan {
    fn add_dir(&mut self, path: &Path) {
        self.directories.push(path.to_path_buf());
    }

    fn add_file(&mut self, path: &Path, contents: impl Into<String>) {
        self.files.push(PlannedFile {
            path: path.to_path_buf(),
            contents: contents.into(),
        });
    }
}

/// Build the plan for `config`.
///
/// Directories come first in creation order, then files in write order. The
/// auth directory and its two files are included only when
/// `config.include_auth` is set.
pub fn build_plan(config: &ProjectConfig) -> Result<FileSystemPlan> {
    let paths = ProjectPaths::new(&config.name);
    let mut plan = FileSystemPlan::default();

    plan.add_dir(&paths.root);
    plan.add_dir(&paths.app_dir);
    plan.add_dir(&paths.routes_dir);
    plan.add_dir(&paths.models_dir);
    if config.include_auth {
        plan.add_dir(&paths.auth_dir);
    }

    plan.add_file(&paths.main_path, MAIN_PY);
    plan.add_file(&paths.routes_init_path, PACKAGE_INIT_PY);
    plan.add_file(&paths.users_route_path, USERS_ROUTE_PY);
    plan.add_file(&paths.models_init_path, PACKAGE_INIT_PY);
    plan.add_file(&paths.user_model_path, USER_MODEL_PY);
    if config.include_auth {
        plan.add_file(&paths.auth_init_path, PACKAGE_INIT_PY);
        plan.add_file(&paths.auth_route_path, AUTH_ROUTE_PY);
    }
    plan.add_file(&paths.requirements_path, REQUIREMENTS_TXT);
    plan.add_file(&paths.gitignore_path, GITIGNORE);
    plan.add_file(&paths.readme_path, render_readme(&config.name)?);

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(plan: &FileSystemPlan) -> Vec<&Path> {
        plan.directories.iter().map(PathBuf::as_path).collect()
    }

    fn files(plan: &FileSystemPlan) -> Vec<&Path> {
        plan.files.iter().map(|file| file.path.as_path()).collect()
    }

    fn contents_of<'a>(plan: &'a FileSystemPlan, path: &str) -> &'a str {
        plan.files
            .iter()
            .find(|file| file.path == Path::new(path))
            .map(|file| file.contents.as_str())
            .unwrap_or_else(|| panic!("{path} not planned"))
    }

    #[test]
    fn plan_without_auth_lists_base_layout_in_order() {
        let plan = build_plan(&ProjectConfig::new("demo", false)).expect("plan");

        assert_eq!(
            dirs(&plan),
            vec![
                Path::new("demo"),
                Path::new("demo/app"),
                Path::new("demo/app/routes"),
                Path::new("demo/app/models"),
            ]
        );
        assert_eq!(
            files(&plan),
            vec![
                Path::new("demo/main.py"),
                Path::new("demo/app/routes/__init__.py"),
                Path::new("demo/app/routes/users.py"),
                Path::new("demo/app/models/__init__.py"),
                Path::new("demo/app/models/user.py"),
                Path::new("demo/requirements.txt"),
                Path::new("demo/.gitignore"),
                Path::new("demo/README.md"),
            ]
        );
    }

    #[test]
    fn auth_adds_one_directory_and_two_files() {
        let base = build_plan(&ProjectConfig::new("demo", false)).expect("plan");
        let auth = build_plan(&ProjectConfig::new("demo", true)).expect("plan");

        let extra_dirs: Vec<&Path> = dirs(&auth)
            .into_iter()
            .filter(|dir| !base.directories.iter().any(|d| d.as_path() == *dir))
            .collect();
        assert_eq!(extra_dirs, vec![Path::new("demo/app/auth")]);

        let extra_files: Vec<&PlannedFile> = auth
            .files
            .iter()
            .filter(|file| !base.files.contains(file))
            .collect();
        let extra_paths: Vec<&Path> = extra_files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            extra_paths,
            vec![
                Path::new("demo/app/auth/__init__.py"),
                Path::new("demo/app/auth/auth.py"),
            ]
        );
        assert_eq!(auth.files.len(), base.files.len() + 2);
        assert_eq!(contents_of(&auth, "demo/app/auth/__init__.py"), "");
        assert_eq!(contents_of(&auth, "demo/app/auth/auth.py"), AUTH_ROUTE_PY);
    }

    #[test]
    fn plan_fills_fixed_contents() {
        let plan = build_plan(&ProjectConfig::new("demo", false)).expect("plan");

        assert_eq!(contents_of(&plan, "demo/main.py"), MAIN_PY);
        assert_eq!(contents_of(&plan, "demo/app/routes/__init__.py"), "");
        assert_eq!(contents_of(&plan, "demo/app/models/__init__.py"), "");
        assert_eq!(
            contents_of(&plan, "demo/requirements.txt"),
            "fastapi\npydantic\njose\nuvicorn\n"
        );
        assert_eq!(contents_of(&plan, "demo/.gitignore"), "__pycache__/\n.env");
        assert!(contents_of(&plan, "demo/README.md").starts_with("# demo\n"));
    }

    #[test]
    fn plan_is_deterministic() {
        let config = ProjectConfig::new("svc", true);
        assert_eq!(
            build_plan(&config).expect("plan"),
            build_plan(&config).expect("plan")
        );
    }

    #[test]
    fn default_config_roots_plan_at_default_name() {
        let plan = build_plan(&ProjectConfig::default()).expect("plan");
        assert_eq!(plan.directories[0], Path::new("fastapi_project"));
        assert!(!plan.directories.iter().any(|dir| dir.ends_with("auth")));
    }
}
