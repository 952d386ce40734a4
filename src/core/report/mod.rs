//! Report generation for evaluated transcripts
//!
//! The plain-text report is the canonical output. A Markdown variant carries
//! the same figures for pasting into advising notes.

pub mod formats;
pub mod gpa;

use crate::core::codec::CourseId;
use crate::core::evaluator::Evaluation;
use crate::core::models::Transcript;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};
pub use gpa::Gpa;

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Parsed transcript
    pub transcript: &'a Transcript,
    /// Evaluation of the transcript
    pub evaluation: &'a Evaluation,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(transcript: &'a Transcript, evaluation: &'a Evaluation) -> Self {
        Self {
            transcript,
            evaluation,
        }
    }

    /// GPA of the evaluation
    #[must_use]
    pub const fn gpa(&self) -> Gpa {
        Gpa::new(self.evaluation.gpa100())
    }

    /// Whether the congratulations line replaces the course list
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.evaluation.is_complete()
    }

    /// Possible courses with their credit, in evaluation order
    pub fn possible_courses(&self) -> impl Iterator<Item = (CourseId, Option<u32>)> + '_ {
        self.evaluation
            .possible
            .iter()
            .map(|&id| (id, self.transcript.get(id).map(|r| r.credit)))
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render report content as a string
    fn render(&self, ctx: &ReportContext) -> String;

    /// Render a report and write it to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render(ctx))?;
        Ok(())
    }
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Render the plain-text report for an evaluation
#[must_use]
pub fn render_text(transcript: &Transcript, evaluation: &Evaluation) -> String {
    TextReporter::new().render(&ReportContext::new(transcript, evaluation))
}
