//! Error types for transcript parsing
//!
//! [`CodecError`] covers course codes that cannot be mapped to a [`CourseId`],
//! [`TranscriptError`] covers everything the reader and record parser reject.
//! Record-level variants carry the 1-based line number of the offending line.
//!
//! [`CourseId`]: crate::core::codec::CourseId

use thiserror::Error;

/// A course code that is outside the encodable domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The code has no characters
    #[error("course code is empty")]
    Empty,

    /// The code is longer than the encodable maximum
    #[error("course code '{code}' is {len} characters long (maximum {max})")]
    TooLong {
        /// Offending code
        code: String,
        /// Its length in characters
        len: usize,
        /// Maximum supported length
        max: usize,
    },

    /// The code contains a character outside `[0-9a-zA-Z]`
    #[error("course code '{code}' contains invalid character {ch:?}")]
    InvalidChar {
        /// Offending code
        code: String,
        /// First character outside the alphabet
        ch: char,
    },

    /// A multi-character code starting with `0` collides with its shorter form
    #[error("course code '{code}' has a leading '0'")]
    LeadingZero {
        /// Offending code
        code: String,
    },
}

/// Errors produced while reading or parsing a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The underlying stream failed
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    /// The line does not split into exactly four `|`-separated fields
    #[error("line {line}: expected 4 '|'-separated fields, found {found} in '{text}'")]
    FieldCount {
        /// 1-based line number
        line: usize,
        /// Number of fields found
        found: usize,
        /// Line text
        text: String,
    },

    /// The course code field is not a valid code
    #[error("line {line}: {source}")]
    Code {
        /// 1-based line number
        line: usize,
        /// Codec failure
        #[source]
        source: CodecError,
    },

    /// The credit field is not a decimal integer
    #[error("line {line}: credit '{value}' is not an integer")]
    Credit {
        /// 1-based line number
        line: usize,
        /// Raw credit field
        value: String,
    },

    /// The credit field is a negative integer
    #[error("line {line}: credit '{value}' is negative")]
    NegativeCredit {
        /// 1-based line number
        line: usize,
        /// Raw credit field
        value: String,
    },

    /// The credit field is an integer too large for a credit count
    #[error("line {line}: credit '{value}' is out of range (maximum {max})")]
    CreditOutOfRange {
        /// 1-based line number
        line: usize,
        /// Raw credit field
        value: String,
        /// Largest accepted credit
        max: u32,
    },

    /// The grade field starts with an unknown character
    #[error("line {line}: unrecognized grade '{value}'")]
    Grade {
        /// 1-based line number
        line: usize,
        /// Raw grade field
        value: String,
    },

    /// A code inside the prerequisite expression is invalid
    #[error("line {line}: prerequisite '{expr}': {source}")]
    Prerequisite {
        /// 1-based line number
        line: usize,
        /// Raw prerequisite field
        expr: String,
        /// Codec failure
        #[source]
        source: CodecError,
    },
}

impl TranscriptError {
    /// Line number the error refers to, if it is record-specific
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::FieldCount { line, .. }
            | Self::Code { line, .. }
            | Self::Credit { line, .. }
            | Self::NegativeCredit { line, .. }
            | Self::CreditOutOfRange { line, .. }
            | Self::Grade { line, .. }
            | Self::Prerequisite { line, .. } => Some(*line),
        }
    }
}
