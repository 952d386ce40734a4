//! Prerequisite expressions
//!
//! A prerequisite field is a disjunction of conjunctions over course codes:
//!
//! ```text
//! expr := "" | conj (";" conj)*
//! conj := "" | code ("," code)*
//! ```
//!
//! `"a,b;c"` reads as "(a and b) or c". An empty field means the course has
//! no prerequisites at all. A group with no codes in it (for example the
//! second group of `"a;"`, or the single group of `","`) is kept as an empty
//! conjunction, which is vacuously satisfied. Empty codes between commas are
//! skipped, so `"a,,b"` is the same group as `"a,b"`.

use crate::core::codec::CourseId;
use crate::core::error::CodecError;

/// A group of course ids that must all be passed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    ids: Vec<CourseId>,
}

impl Conjunction {
    /// Create a conjunction from ids, preserving order and duplicates
    #[must_use]
    pub const fn new(ids: Vec<CourseId>) -> Self {
        Self { ids }
    }

    /// Parse one `,`-separated group
    ///
    /// # Errors
    /// Returns the first [`CodecError`] hit while encoding a code.
    pub fn parse(group: &str) -> Result<Self, CodecError> {
        group
            .split(',')
            .filter(|code| !code.is_empty())
            .map(CourseId::encode)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Required ids in input order
    #[must_use]
    pub fn ids(&self) -> &[CourseId] {
        &self.ids
    }

    /// Whether the group requires nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when every id satisfies `passed`; an empty group is satisfied
    pub fn is_satisfied<F>(&self, passed: F) -> bool
    where
        F: Fn(CourseId) -> bool,
    {
        self.ids.iter().all(|&id| passed(id))
    }
}

/// Disjunction of [`Conjunction`] groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prerequisites {
    groups: Vec<Conjunction>,
}

impl Prerequisites {
    /// An expression with no groups: no prerequisites
    #[must_use]
    pub const fn none() -> Self {
        Self { groups: Vec::new() }
    }

    /// Build from explicit groups
    #[must_use]
    pub const fn from_groups(groups: Vec<Conjunction>) -> Self {
        Self { groups }
    }

    /// Parse a prerequisite field
    ///
    /// # Errors
    /// Returns the first [`CodecError`] hit while encoding a code.
    pub fn parse(expr: &str) -> Result<Self, CodecError> {
        if expr.is_empty() {
            return Ok(Self::none());
        }

        expr.split(';')
            .map(Conjunction::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_groups)
    }

    /// Groups in input order
    #[must_use]
    pub fn groups(&self) -> &[Conjunction] {
        &self.groups
    }

    /// Whether the course has no prerequisites at all
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.groups.is_empty()
    }

    /// Evaluate the disjunction
    ///
    /// True when there are no groups, or when at least one group has every id
    /// satisfying `passed`.
    pub fn is_satisfied<F>(&self, passed: F) -> bool
    where
        F: Fn(CourseId) -> bool,
    {
        self.is_unconditional() || self.groups.iter().any(|group| group.is_satisfied(&passed))
    }
}
