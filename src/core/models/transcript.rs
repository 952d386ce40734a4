//! Transcript model

use super::{CourseRecord, Grade, UNSET_GRADE_VALUE};
use crate::core::codec::CourseId;
use std::collections::HashMap;

/// Parsed transcript: per-course tables plus the order records appeared in
///
/// A course id that appears on several lines keeps only its last record, but
/// every line still holds its place in [`Transcript::order`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Ids in input order, one entry per parsed line
    order: Vec<CourseId>,

    /// Latest record for each id
    records: HashMap<CourseId, CourseRecord>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any earlier record with the same id
    ///
    /// # Returns
    /// The replaced record, if there was one
    pub fn insert(&mut self, record: CourseRecord) -> Option<CourseRecord> {
        self.order.push(record.id);
        self.records.insert(record.id, record)
    }

    /// Ids in input order (duplicates included)
    #[must_use]
    pub fn order(&self) -> &[CourseId] {
        &self.order
    }

    /// Record for an id
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&CourseRecord> {
        self.records.get(&id)
    }

    /// Record for a course code
    #[must_use]
    pub fn get_by_code(&self, code: &str) -> Option<&CourseRecord> {
        CourseId::encode(code).ok().and_then(|id| self.get(id))
    }

    /// Records in input order, one per parsed line
    pub fn records(&self) -> impl Iterator<Item = &CourseRecord> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Grade recorded for an id, `None` if it was never a record subject
    #[must_use]
    pub fn grade(&self, id: CourseId) -> Option<Grade> {
        self.get(id).map(|record| record.grade)
    }

    /// Integer grade value for an id, [`UNSET_GRADE_VALUE`] if unseen
    #[must_use]
    pub fn grade_value(&self, id: CourseId) -> i32 {
        self.grade(id).map_or(UNSET_GRADE_VALUE, Grade::value)
    }

    /// Whether the id has a passing grade (D or better)
    #[must_use]
    pub fn is_passed(&self, id: CourseId) -> bool {
        self.grade(id).is_some_and(Grade::is_passing)
    }

    /// Number of parsed lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no lines were parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct course ids
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.records.len()
    }
}
