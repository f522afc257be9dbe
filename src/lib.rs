//! Tennis scorer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the runtime
//! configuration shared by the `tennis-scorer` and `replay` binaries.

pub mod config;
pub mod logging;

pub use tennis_scorer_core as core;
pub use tennis_scorer_export as export;
pub use tennis_scorer_input as input;
pub use tennis_scorer_term as term;
pub use tennis_scorer_types as types;

pub use config::AppConfig;
