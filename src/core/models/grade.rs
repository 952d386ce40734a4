//! Grade model

use std::fmt;

/// Grade value of a course id that never appeared as a record subject
pub const UNSET_GRADE_VALUE: i32 = -2;

/// Letter grade recorded for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// Excellent (4 points)
    A,
    /// Good (3 points)
    B,
    /// Satisfactory (2 points)
    C,
    /// Passing (1 point)
    D,
    /// Failed (0 points)
    F,
    /// Not graded yet (in progress or planned)
    None,
}

/// Standing of a course derived from its grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No grade yet
    Ungraded,
    /// Graded F
    Failed,
    /// Graded D or better
    Passed,
}

impl Grade {
    /// Parse a grade field; only its first character is significant
    ///
    /// An empty field is [`Grade::None`]. Returns `None` for an unknown first
    /// character.
    #[must_use]
    pub fn from_field(field: &str) -> Option<Self> {
        match field.chars().next() {
            None => Some(Self::None),
            Some('A') => Some(Self::A),
            Some('B') => Some(Self::B),
            Some('C') => Some(Self::C),
            Some('D') => Some(Self::D),
            Some('F') => Some(Self::F),
            Some(_) => None,
        }
    }

    /// Integer grade value: A=4 .. D=1, F=0, none=-1
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
            Self::F => 0,
            Self::None => -1,
        }
    }

    /// Whether the grade counts as passed (D or better)
    #[must_use]
    pub const fn is_passing(self) -> bool {
        self.value() > 0
    }

    /// Classify the grade
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::None => Status::Ungraded,
            Self::F => Status::Failed,
            Self::A | Self::B | Self::C | Self::D => Status::Passed,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
            Self::None => "",
        };
        f.write_str(letter)
    }
}

impl Status {
    /// Whether the course still has to be (re)taken
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        !matches!(self, Self::Passed)
    }

    /// Whether the credit counts toward hours attempted
    #[must_use]
    pub const fn counts_attempted(self) -> bool {
        !matches!(self, Self::Ungraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_uses_first_char() {
        assert_eq!(Grade::from_field("A"), Some(Grade::A));
        assert_eq!(Grade::from_field("B+"), Some(Grade::B));
        assert_eq!(Grade::from_field("C-"), Some(Grade::C));
        assert_eq!(Grade::from_field("D"), Some(Grade::D));
        assert_eq!(Grade::from_field("F"), Some(Grade::F));
        assert_eq!(Grade::from_field(""), Some(Grade::None));
    }

    #[test]
    fn test_from_field_rejects_unknown() {
        assert_eq!(Grade::from_field("E"), None);
        assert_eq!(Grade::from_field("a"), None);
        assert_eq!(Grade::from_field(" A"), None);
    }

    #[test]
    fn test_values() {
        let values: Vec<i32> = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F, Grade::None]
            .into_iter()
            .map(Grade::value)
            .collect();
        assert_eq!(values, vec![4, 3, 2, 1, 0, -1]);
        assert!(UNSET_GRADE_VALUE < Grade::None.value());
    }

    #[test]
    fn test_status() {
        assert_eq!(Grade::None.status(), Status::Ungraded);
        assert_eq!(Grade::F.status(), Status::Failed);
        assert_eq!(Grade::D.status(), Status::Passed);
        assert!(Status::Failed.is_outstanding());
        assert!(Status::Ungraded.is_outstanding());
        assert!(!Status::Passed.is_outstanding());
        assert!(Status::Failed.counts_attempted());
        assert!(!Status::Ungraded.counts_attempted());
        assert!(Grade::D.is_passing());
        assert!(!Grade::F.is_passing());
        assert!(!Grade::None.is_passing());
    }
}
