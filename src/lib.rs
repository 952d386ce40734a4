//! Shared library for `NuTranscript`
//! Contains the transcript evaluator used by the CLI

pub mod config;
pub mod core;
pub mod logger;

pub use core::get_version;
