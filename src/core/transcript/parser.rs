//! Record parser
//!
//! Each record is `code|credit|prerequisites|grade`. Fields are taken
//! verbatim; no whitespace trimming is applied.

use super::reader::{RawLine, TranscriptReader};
use crate::core::codec::CourseId;
use crate::core::error::TranscriptError;
use crate::core::models::{CourseRecord, Grade, Transcript};
use crate::core::prerequisites::Prerequisites;
use crate::debug;
use std::io::{BufRead, Cursor};

const FIELD_SEPARATOR: char = '|';

/// Parse one record line
///
/// # Errors
/// Returns a [`TranscriptError`] naming the line if it does not have exactly
/// four fields, or if any field is malformed.
pub fn parse_record(line: &RawLine) -> Result<CourseRecord, TranscriptError> {
    let fields: Vec<&str> = line.text.split(FIELD_SEPARATOR).collect();
    let [code, credit, prereqs, grade] = fields[..] else {
        return Err(TranscriptError::FieldCount {
            line: line.number,
            found: fields.len(),
            text: line.text.clone(),
        });
    };

    let id = CourseId::encode(code).map_err(|source| TranscriptError::Code {
        line: line.number,
        source,
    })?;
    let credit = parse_credit(credit, line.number)?;
    let prerequisites =
        Prerequisites::parse(prereqs).map_err(|source| TranscriptError::Prerequisite {
            line: line.number,
            expr: prereqs.to_string(),
            source,
        })?;
    let grade = Grade::from_field(grade).ok_or_else(|| TranscriptError::Grade {
        line: line.number,
        value: grade.to_string(),
    })?;

    Ok(CourseRecord::new(
        code.to_string(),
        id,
        credit,
        grade,
        prerequisites,
    ))
}

/// Parse a credit field: an optional `-` followed by decimal digits
fn parse_credit(field: &str, line: usize) -> Result<u32, TranscriptError> {
    let (negative, digits) = field
        .strip_prefix('-')
        .map_or((false, field), |rest| (true, rest));
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TranscriptError::Credit {
            line,
            value: field.to_string(),
        });
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(TranscriptError::NegativeCredit {
            line,
            value: field.to_string(),
        });
    }

    // Only overflow is left once every byte is a digit
    digits
        .parse::<u32>()
        .map_err(|_| TranscriptError::CreditOutOfRange {
            line,
            value: field.to_string(),
            max: u32::MAX,
        })
}

/// Read and parse a whole transcript
///
/// Reading stops at the first empty line. A record whose id was already seen
/// replaces the earlier record.
///
/// # Errors
/// Returns the first [`TranscriptError`] encountered.
pub fn parse_transcript<R: BufRead>(
    input: R,
    max_line_length: usize,
) -> Result<Transcript, TranscriptError> {
    let mut transcript = Transcript::new();

    for line in TranscriptReader::with_max_line_length(input, max_line_length) {
        let line = line?;
        let record = parse_record(&line)?;
        debug!(
            "line {}: {} ({}) credit={} grade={:?} groups={}",
            line.number,
            record.code,
            record.id.value(),
            record.credit,
            record.grade,
            record.prerequisites.groups().len()
        );
        if transcript.insert(record).is_some() {
            debug!("line {}: replaces an earlier record", line.number);
        }
    }

    Ok(transcript)
}

/// Parse a transcript held in a string
///
/// # Errors
/// Returns the first [`TranscriptError`] encountered.
pub fn parse_transcript_str(
    input: &str,
    max_line_length: usize,
) -> Result<Transcript, TranscriptError> {
    parse_transcript(Cursor::new(input), max_line_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CodecError;
    use crate::core::transcript::DEFAULT_MAX_LINE_LENGTH;

    fn raw(text: &str) -> RawLine {
        RawLine {
            number: 7,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_parse_full_record() {
        let record = parse_record(&raw("c3|4|c1,c2;c0|B")).unwrap();
        assert_eq!(record.code, "c3");
        assert_eq!(record.id, CourseId::encode("c3").unwrap());
        assert_eq!(record.credit, 4);
        assert_eq!(record.grade, Grade::B);
        assert_eq!(record.prerequisites.groups().len(), 2);
    }

    #[test]
    fn test_parse_empty_grade_and_prereqs() {
        let record = parse_record(&raw("c1|3||")).unwrap();
        assert_eq!(record.grade, Grade::None);
        assert!(record.prerequisites.is_unconditional());
    }

    #[test]
    fn test_wrong_field_count() {
        for text in ["c1|3|", "c1|3||A|x", "c1"] {
            let err = parse_record(&raw(text)).unwrap_err();
            assert!(matches!(err, TranscriptError::FieldCount { line: 7, .. }));
        }
    }

    #[test]
    fn test_bad_code() {
        let err = parse_record(&raw("cs101|3||A")).unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::Code {
                line: 7,
                source: CodecError::TooLong { .. }
            }
        ));
        assert!(matches!(
            parse_record(&raw("|3||A")).unwrap_err(),
            TranscriptError::Code {
                source: CodecError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_credit() {
        for text in ["c1|x||A", "c1|||A", "c1|3a||A", "c1|+3||A", "c1| 3||A", "c1|-||A"] {
            let err = parse_record(&raw(text)).unwrap_err();
            assert!(
                matches!(err, TranscriptError::Credit { .. }),
                "{text} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_negative_credit() {
        assert!(matches!(
            parse_record(&raw("c1|-3||A")).unwrap_err(),
            TranscriptError::NegativeCredit { .. }
        ));
        assert_eq!(parse_record(&raw("c1|-0||A")).unwrap().credit, 0);
    }

    #[test]
    fn test_credit_overflow_is_out_of_range() {
        let err = parse_record(&raw("a|99999999999||A")).unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::CreditOutOfRange { line: 7, .. }
        ));
        assert!(err.to_string().contains("out of range"));
        assert_eq!(
            parse_record(&raw("a|4294967295||A")).unwrap().credit,
            u32::MAX
        );
    }

    #[test]
    fn test_bad_grade() {
        let err = parse_record(&raw("c1|3||E")).unwrap_err();
        assert!(matches!(err, TranscriptError::Grade { line: 7, .. }));
    }

    #[test]
    fn test_bad_prerequisite() {
        let err = parse_record(&raw("c1|3|c0,x!|A")).unwrap_err();
        assert!(matches!(err, TranscriptError::Prerequisite { line: 7, .. }));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_parse_transcript_stops_at_blank() {
        let input = "c1|3||A\nc2|4|c1|\n\ngarbage\n";
        let transcript = parse_transcript_str(input, DEFAULT_MAX_LINE_LENGTH).unwrap();
        assert_eq!(transcript.len(), 2);
        assert!(transcript.get_by_code("c2").is_some());
    }

    #[test]
    fn test_parse_transcript_reports_line_number() {
        let input = "c1|3||A\nc2|4|c1\n\n";
        let err = parse_transcript_str(input, DEFAULT_MAX_LINE_LENGTH).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
