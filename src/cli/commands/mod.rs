//! CLI command handlers for `NuTranscript`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod evaluate;
