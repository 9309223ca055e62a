//! Project configuration resolved once at startup.

/// Root directory name used when `--name` is not given.
pub const DEFAULT_PROJECT_NAME: &str = "fastapi_project";

/// What to scaffold.
///
/// `name` is used verbatim as the root directory name and is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub include_auth: bool,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, include_auth: bool) -> Self {
        Self {
            name: name.into(),
            include_auth,
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME, false)
    }
}
