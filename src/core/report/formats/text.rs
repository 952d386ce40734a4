//! Plain-text report
//!
//! ```text
//! GPA: 3.6
//! Hours Attempted: 7
//! Hours Completed: 7
//! Credits Remaining: 3
//!
//! Possible Courses to Take Next
//!   c3
//! ```

use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

const INDENT: &str = "  ";
const CONGRATULATIONS: &str = "None - Congratulations!";

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        let totals = &ctx.evaluation.totals;
        let mut out = String::new();

        let _ = writeln!(out, "GPA: {}", ctx.gpa());
        let _ = writeln!(out, "Hours Attempted: {}", totals.hours_attempted);
        let _ = writeln!(out, "Hours Completed: {}", totals.hours_completed);
        let _ = writeln!(out, "Credits Remaining: {}", totals.credits_remaining);
        out.push('\n');
        out.push_str("Possible Courses to Take Next\n");

        if ctx.is_complete() {
            let _ = writeln!(out, "{INDENT}{CONGRATULATIONS}");
        } else {
            for (id, _) in ctx.possible_courses() {
                let _ = writeln!(out, "{INDENT}{id}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::evaluate;
    use crate::core::transcript::{parse_transcript_str, DEFAULT_MAX_LINE_LENGTH};

    fn render(input: &str) -> String {
        let transcript = parse_transcript_str(input, DEFAULT_MAX_LINE_LENGTH).unwrap();
        let evaluation = evaluate(&transcript);
        TextReporter::new().render(&ReportContext::new(&transcript, &evaluation))
    }

    #[test]
    fn test_congratulations() {
        assert_eq!(
            render("a|4||A\nb|3||B\n\n"),
            "GPA: 3.6\n\
             Hours Attempted: 7\n\
             Hours Completed: 7\n\
             Credits Remaining: 0\n\
             \n\
             Possible Courses to Take Next\n\
             \x20 None - Congratulations!\n"
        );
    }

    #[test]
    fn test_lists_possible_courses() {
        let report = render("c1|3||A\nc2|4|c1|\nc3|4|c2|\n\n");
        assert!(report.ends_with("Possible Courses to Take Next\n  c2\n"));
        assert!(report.contains("Credits Remaining: 8\n"));
    }

    #[test]
    fn test_remaining_credit_without_possible_courses() {
        // Nothing is takeable but credit remains: the list is left empty
        let report = render("c2|4|c1|\n\n");
        assert!(report.ends_with("Possible Courses to Take Next\n"));
    }

    #[test]
    fn test_empty_transcript() {
        let report = render("\n");
        assert!(report.starts_with("GPA: 0.0\n"));
        assert!(report.ends_with("  None - Congratulations!\n"));
    }
}
