//! Deterministic, pure logic for building a scaffold.
//!
//! Core modules must be free of I/O side effects. They turn a
//! [`config::ProjectConfig`] into a [`plan::FileSystemPlan`] and check it.

pub mod config;
pub mod invariants;
pub mod plan;
pub mod templates;
