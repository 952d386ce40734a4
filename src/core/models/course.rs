//! Course record model

use crate::core::codec::CourseId;
use crate::core::models::{Grade, Status};
use crate::core::prerequisites::Prerequisites;

/// One parsed transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Course code as written (e.g., "c3")
    pub code: String,

    /// Encoded course id
    pub id: CourseId,

    /// Credit hours
    pub credit: u32,

    /// Recorded grade
    pub grade: Grade,

    /// Prerequisite expression
    pub prerequisites: Prerequisites,
}

impl CourseRecord {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `id` - Encoded id of `code`
    /// * `credit` - Credit hours
    /// * `grade` - Recorded grade
    /// * `prerequisites` - Parsed prerequisite expression
    #[must_use]
    pub const fn new(
        code: String,
        id: CourseId,
        credit: u32,
        grade: Grade,
        prerequisites: Prerequisites,
    ) -> Self {
        Self {
            code,
            id,
            credit,
            grade,
            prerequisites,
        }
    }

    /// Standing derived from the grade
    #[must_use]
    pub const fn status(&self) -> Status {
        self.grade.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let id = CourseId::encode("c3").unwrap();
        let prereqs = Prerequisites::parse("c1,c2").unwrap();
        let record = CourseRecord::new("c3".to_string(), id, 4, Grade::B, prereqs.clone());

        assert_eq!(record.code, "c3");
        assert_eq!(record.id, id);
        assert_eq!(record.credit, 4);
        assert_eq!(record.prerequisites, prereqs);
        assert_eq!(record.status(), Status::Passed);
    }

    #[test]
    fn test_ungraded_record() {
        let id = CourseId::encode("c4").unwrap();
        let record = CourseRecord::new("c4".to_string(), id, 3, Grade::None, Prerequisites::none());
        assert_eq!(record.status(), Status::Ungraded);
        assert!(record.prerequisites.is_unconditional());
    }
}
