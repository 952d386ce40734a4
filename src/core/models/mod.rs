//! Data models for `NuTranscript`

pub mod course;
pub mod grade;
pub mod transcript;

pub use course::CourseRecord;
pub use grade::{Grade, Status, UNSET_GRADE_VALUE};
pub use transcript::Transcript;
