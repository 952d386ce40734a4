//! Core module: transcript parsing, evaluation and reporting

pub mod codec;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod prerequisites;
pub mod report;
pub mod transcript;

pub use codec::CourseId;
pub use error::{CodecError, TranscriptError};
pub use evaluator::{evaluate, Evaluation, Totals};
pub use models::{CourseRecord, Grade, Status, Transcript};
pub use prerequisites::{Conjunction, Prerequisites};

/// Returns the current version of the `NuTranscript` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
