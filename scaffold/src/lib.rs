//! Web-service project scaffolder.
//!
//! Given a project name and an auth toggle, this crate writes a fixed FastAPI
//! project skeleton to disk. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (configuration, templates, plan
//!   building, plan invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (directory and file creation) and the
//!   filesystem error type.
//!
//! [`generate`] coordinates the two to implement the CLI.

pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
