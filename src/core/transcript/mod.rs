//! Transcript input: line reader and record parser

pub mod parser;
pub mod reader;

pub use parser::{parse_record, parse_transcript, parse_transcript_str};
pub use reader::{read_lines, RawLine, TranscriptReader, DEFAULT_MAX_LINE_LENGTH};
