//! Built-in file templates written into every scaffold.
//!
//! Contents are fixed at build time. Only `README.md` is parameterized (by the
//! project name) and is rendered through minijinja.

use anyhow::{Context, Result};
use minijinja::{Environment, context};

pub const MAIN_PY: &str = include_str!("templates/main.py");
pub const USERS_ROUTE_PY: &str = include_str!("templates/users.py");
pub const USER_MODEL_PY: &str = include_str!("templates/user.py");
pub const AUTH_ROUTE_PY: &str = include_str!("templates/auth.py");
/// Package marker; always empty.
pub const PACKAGE_INIT_PY: &str = "";
pub const REQUIREMENTS_TXT: &str = "fastapi\npydantic\njose\nuvicorn\n";
pub const GITIGNORE: &str = "__pycache__/\n.env";

const README_TEMPLATE: &str = "# {{ name }}\n\nGenerated using FastAPI Scaffold CLI";

/// Render the project readme with `name` in its title line.
pub fn render_readme(name: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("README.md", README_TEMPLATE)
        .context("load README.md template")?;
    let template = env.get_template("README.md")?;
    template
        .render(context! { name => name })
        .context("render README.md template")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_interpolates_name_into_title() {
        let readme = render_readme("demo").expect("render");
        assert_eq!(readme, "# demo\n\nGenerated using FastAPI Scaffold CLI");
    }

    #[test]
    fn readme_keeps_name_verbatim() {
        let readme = render_readme("my <api> & {{co}}").expect("render");
        assert!(readme.starts_with("# my <api> & {{co}}\n"));
    }

    #[test]
    fn requirements_list_four_packages_in_order() {
        let lines: Vec<&str> = REQUIREMENTS_TXT.lines().collect();
        assert_eq!(lines, vec!["fastapi", "pydantic", "jose", "uvicorn"]);
        assert!(REQUIREMENTS_TXT.ends_with('\n'));
    }

    #[test]
    fn route_templates_expose_expected_endpoints() {
        assert!(MAIN_PY.contains("@app.get(\"/\")"));
        assert!(USERS_ROUTE_PY.contains("@router.get(\"/users\")"));
        assert!(USERS_ROUTE_PY.contains("return {\"users\": []}"));
        assert!(AUTH_ROUTE_PY.contains("@router.post(\"/login\")"));
        assert!(AUTH_ROUTE_PY.contains("\"Login successful\""));
    }

    #[test]
    fn user_model_declares_fields() {
        for field in ["id: int", "username: str", "email: str"] {
            assert!(
                USER_MODEL_PY.lines().any(|line| line.trim() == field),
                "missing field {field}"
            );
        }
    }

    #[test]
    fn main_template_bytes_are_fixed() {
        assert_eq!(
            MAIN_PY,
            "\n\tfrom fastapi import FastAPI\n\tapp = FastAPI()\n\n\t@app.get(\"/\")\n\tdef read_root():\n    return {\"message\": \"Hello, FastAPI!\"}\n"
        );
    }

    #[test]
    fn users_route_template_bytes_are_fixed() {
        assert_eq!(
            USERS_ROUTE_PY,
            "\n\tfrom fastapi import APIRouter\n\trouter = APIRouter()\n\n\t@router.get(\"/users\")\n\tdef get_users():\n\t\treturn {\"users\": []}\n"
        );
    }

    #[test]
    fn user_model_template_bytes_are_fixed() {
        assert_eq!(
            USER_MODEL_PY,
            "\n\tfrom pydantic import BaseModel\n\nclass User(BaseModel):\n    id: int\n    username: str\n    email: str\n"
        );
    }

    #[test]
    fn auth_route_template_bytes_are_fixed() {
        assert_eq!(
            AUTH_ROUTE_PY,
            "\n\tfrom fastapi import APIRouter\n\n\trouter = APIRouter()\n\n\t@router.post(\"/login\")\n\tdef login():\n\t\treturn {\"message\": \"Login successful\"}\n"
        );
    }
}
