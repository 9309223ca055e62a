//! Side-effecting helpers that put a plan on disk.

pub mod error;
pub mod materialize;
