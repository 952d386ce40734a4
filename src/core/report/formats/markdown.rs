//! Markdown report generator
//!
//! Renders the transcript summary as a Markdown document: a metrics table
//! followed by a bullet list of courses that can be taken next.

use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let totals = &ctx.evaluation.totals;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{gpa}}", &ctx.gpa().to_string());
        output = output.replace("{{hours_attempted}}", &totals.hours_attempted.to_string());
        output = output.replace("{{hours_completed}}", &totals.hours_completed.to_string());
        output = output.replace(
            "{{credits_remaining}}",
            &totals.credits_remaining.to_string(),
        );
        output = output.replace(
            "{{course_count}}",
            &ctx.transcript.course_count().to_string(),
        );

        let possible = Self::generate_possible_list(ctx);
        output = output.replace("{{possible_courses}}", possible.trim_end());

        output
    }

    /// Generate the bullet list of possible courses
    fn generate_possible_list(ctx: &ReportContext) -> String {
        if ctx.is_complete() {
            return "None - Congratulations!\n".to_string();
        }
        if ctx.evaluation.possible.is_empty() {
            return "_No course is currently unlocked._\n".to_string();
        }

        let mut list = String::new();
        for (id, credit) in ctx.possible_courses() {
            match credit {
                Some(credit) => {
                    let _ = writeln!(list, "- `{id}` ({credit} credits)");
                }
                None => {
                    let _ = writeln!(list, "- `{id}`");
                }
            }
        }
        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        self.render_template(ctx)
    }
}
