//! Transcript evaluation: credit totals, GPA and next-course eligibility

use crate::core::codec::CourseId;
use crate::core::models::{Grade, Transcript};
use crate::{debug, info};

/// Credit-hour totals accumulated over a transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of `100 * grade value * credit` over passed courses
    pub grade_points: u64,
    /// Credit of failed and passed courses
    pub hours_attempted: u64,
    /// Credit of passed courses
    pub hours_completed: u64,
    /// Credit of ungraded and failed courses
    pub credits_remaining: u64,
}

impl Totals {
    /// Add one course's credit according to its grade
    pub fn add(&mut self, grade: Grade, credit: u32) {
        let credit = u64::from(credit);
        let status = grade.status();
        if status.counts_attempted() {
            self.hours_attempted += credit;
        }
        if status.is_outstanding() {
            self.credits_remaining += credit;
        }
        if grade.is_passing() {
            self.hours_completed += credit;
            let points = u64::try_from(grade.value()).unwrap_or_default();
            self.grade_points += 100 * points * credit;
        }
    }

    /// GPA scaled by 100, truncated; 0 when nothing was attempted
    #[must_use]
    pub const fn gpa100(&self) -> u64 {
        if self.hours_attempted == 0 {
            0
        } else {
            self.grade_points / self.hours_attempted
        }
    }
}

/// Result of evaluating a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Credit totals
    pub totals: Totals,
    /// Courses that can be taken next, in input order
    pub possible: Vec<CourseId>,
}

impl Evaluation {
    /// GPA scaled by 100
    #[must_use]
    pub const fn gpa100(&self) -> u64 {
        self.totals.gpa100()
    }

    /// True when nothing is left to take
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.possible.is_empty() && self.totals.credits_remaining == 0
    }
}

/// Evaluate a parsed transcript
///
/// Every parsed line is visited in input order using the latest record for
/// its id. A course is possible to take next when it is not passed and its
/// prerequisite expression holds, where a prerequisite counts only if it has
/// a passing grade on this transcript.
#[must_use]
pub fn evaluate(transcript: &Transcript) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for record in transcript.records() {
        let status = record.status();
        evaluation.totals.add(record.grade, record.credit);

        let satisfied = record
            .prerequisites
            .is_satisfied(|id| transcript.is_passed(id));
        debug!(
            "{}: {:?}, credit {}, prerequisites {}",
            record.code,
            status,
            record.credit,
            if satisfied { "met" } else { "unmet" }
        );

        if satisfied && status.is_outstanding() {
            evaluation.possible.push(record.id);
        }
    }

    info!(
        "Evaluated {} records: {} attempted, {} completed, {} remaining, {} possible",
        transcript.len(),
        evaluation.totals.hours_attempted,
        evaluation.totals.hours_completed,
        evaluation.totals.credits_remaining,
        evaluation.possible.len()
    );

    evaluation
}
