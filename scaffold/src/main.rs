//! FastAPI project scaffolder CLI.
//!
//! Creates `<name>/` in the current directory with route, model and metadata
//! files. `--with-auth` adds an `app/auth` module.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use fastapi_scaffold::core::config::{DEFAULT_PROJECT_NAME, ProjectConfig};
use fastapi_scaffold::exit_codes;
use fastapi_scaffold::generate::{SUCCESS_MESSAGE, generate, plan_project};
use fastapi_scaffold::logging;

const ERROR_HELP: &str =
    "Errors are printed to stderr as `<operation> <path>: <cause>` and exit with status 1.";

#[derive(Parser, Debug)]
#[command(
    name = "fastapi-scaffold",
    version,
    about = "Scaffold a FastAPI project skeleton",
    after_help = ERROR_HELP
)]
struct Cli {
    /// Project name, used as the root directory and the README title.
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    name: String,
    /// Include authentication module.
    #[arg(long)]
    with_auth: bool,
    /// Print the plan as JSON instead of writing anything.
    #[arg(long)]
    dry_run: bool,
}

impl From<&Cli> for ProjectConfig {
    fn from(cli: &Cli) -> Self {
        ProjectConfig::new(cli.name.clone(), cli.with_auth)
    }
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILED
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let config = ProjectConfig::from(&cli);
    if cli.dry_run {
        let plan = plan_project(&config)?;
        let payload = serde_json::to_string_pretty(&plan).context("serialize plan")?;
        println!("{payload}");
        return Ok(());
    }
    generate(Path::new(""), &config)?;
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
