//! Line reader for transcript input
//!
//! Yields raw record lines until the first empty line, which terminates the
//! transcript. Lines longer than the configured maximum are truncated.

use crate::core::error::TranscriptError;
use crate::warn;
use std::io::BufRead;

/// Default maximum record length in characters
pub const DEFAULT_MAX_LINE_LENGTH: usize = 512;

/// A raw record line with its 1-based position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: String,
}

/// Iterator over the record lines of a transcript stream
pub struct TranscriptReader<R> {
    inner: R,
    max_line_length: usize,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> TranscriptReader<R> {
    /// Create a reader that truncates lines to `max_line_length` characters
    pub const fn with_max_line_length(inner: R, max_line_length: usize) -> Self {
        Self {
            inner,
            max_line_length,
            line_number: 0,
            finished: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<RawLine>, TranscriptError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
        if buf.is_empty() {
            return Ok(None);
        }

        if let Some((cut, _)) = buf.char_indices().nth(self.max_line_length) {
            warn!(
                "Line {} exceeds {} characters and was truncated",
                self.line_number, self.max_line_length
            );
            buf.truncate(cut);
        }

        Ok(Some(RawLine {
            number: self.line_number,
            text: buf,
        }))
    }
}

impl<R: BufRead> Iterator for TranscriptReader<R> {
    type Item = Result<RawLine, TranscriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_next() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Read all record lines up to the terminating empty line
///
/// # Errors
/// Returns [`TranscriptError::Io`] if the stream fails.
pub fn read_lines<R: BufRead>(
    inner: R,
    max_line_length: usize,
) -> Result<Vec<RawLine>, TranscriptError> {
    TranscriptReader::with_max_line_length(inner, max_line_length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(lines: &[RawLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_stops_at_blank_line() {
        let input = "a|3||A\nb|4|a|\n\nc|1||B\n";
        let lines = read_lines(Cursor::new(input), DEFAULT_MAX_LINE_LENGTH).unwrap();
        assert_eq!(texts(&lines), vec!["a|3||A", "b|4|a|"]);
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn test_eof_without_terminator() {
        let lines = read_lines(Cursor::new("a|3||A"), DEFAULT_MAX_LINE_LENGTH).unwrap();
        assert_eq!(texts(&lines), vec!["a|3||A"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_lines(Cursor::new(""), 16).unwrap().is_empty());
        assert!(read_lines(Cursor::new("\n"), 16).unwrap().is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = read_lines(Cursor::new("a|3||A\r\nb|1||\r\n\r\n"), 64).unwrap();
        assert_eq!(texts(&lines), vec!["a|3||A", "b|1||"]);
    }

    #[test]
    fn test_trailing_carriage_return_at_eof() {
        let lines = read_lines(Cursor::new("a|3||A\r\n\r"), 64).unwrap();
        assert_eq!(texts(&lines), vec!["a|3||A"]);

        let lines = read_lines(Cursor::new("a|3||A\r"), 64).unwrap();
        assert_eq!(texts(&lines), vec!["a|3||A"]);
    }

    #[test]
    fn test_truncates_long_lines() {
        let lines = read_lines(Cursor::new("abcdefgh\nxy\n\n"), 4).unwrap();
        assert_eq!(texts(&lines), vec!["abcd", "xy"]);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let lines = read_lines(Cursor::new("ééééé\n\n"), 2).unwrap();
        assert_eq!(texts(&lines), vec!["éé"]);
    }
}
