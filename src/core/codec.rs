//! Base-62 course identifier codec
//!
//! Course codes are 1-4 characters from `[0-9a-zA-Z]`. Each character is a
//! base-62 digit (`0-9` → 0..9, `a-z` → 10..35, `A-Z` → 36..61) and the code
//! is read most-significant digit first, giving a dense integer id below
//! `62^4`.

use crate::core::error::CodecError;
use std::fmt;
use std::str::FromStr;

/// Number of symbols in the code alphabet
pub const BASE: u32 = 62;

/// Longest encodable course code
pub const MAX_CODE_LEN: usize = 4;

/// Largest id produced by [`CourseId::encode`] (`62^4 - 1`)
pub const MAX_ID: u32 = BASE * BASE * BASE * BASE - 1;

/// Dense integer identifier of a course code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(u32);

impl CourseId {
    /// Encode a course code
    ///
    /// # Errors
    /// Returns a [`CodecError`] if the code is empty, longer than
    /// [`MAX_CODE_LEN`], contains a character outside `[0-9a-zA-Z]`, or is a
    /// multi-character code starting with `0` (which would alias a shorter
    /// code).
    pub fn encode(code: &str) -> Result<Self, CodecError> {
        let len = code.chars().count();
        if len == 0 {
            return Err(CodecError::Empty);
        }
        if len > MAX_CODE_LEN {
            return Err(CodecError::TooLong {
                code: code.to_string(),
                len,
                max: MAX_CODE_LEN,
            });
        }
        if len > 1 && code.starts_with('0') {
            return Err(CodecError::LeadingZero {
                code: code.to_string(),
            });
        }

        code.chars().try_fold(0, |id, ch| {
            digit_value(ch)
                .map(|digit| id * BASE + digit)
                .ok_or_else(|| CodecError::InvalidChar {
                    code: code.to_string(),
                    ch,
                })
        })
        .map(Self)
    }

    /// Wrap a raw id, returning `None` above [`MAX_ID`]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw <= MAX_ID {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw integer value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Decode back to the course code
    ///
    /// Digits are emitted most-significant first with no leading zeros; id 0
    /// decodes to `"0"`.
    #[must_use]
    pub fn decode(self) -> String {
        if self.0 == 0 {
            return "0".to_string();
        }

        let mut digits = Vec::with_capacity(MAX_CODE_LEN);
        let mut rest = self.0;
        while rest > 0 {
            digits.push(digit_char(rest % BASE));
            rest /= BASE;
        }
        digits.iter().rev().collect()
    }
}

impl FromStr for CourseId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::encode(s)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

/// Encode a course code (see [`CourseId::encode`])
///
/// # Errors
/// Returns a [`CodecError`] for codes outside the encodable domain.
pub fn encode(code: &str) -> Result<CourseId, CodecError> {
    CourseId::encode(code)
}

/// Decode a course id (see [`CourseId::decode`])
#[must_use]
pub fn decode(id: CourseId) -> String {
    id.decode()
}

const fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 36),
        _ => None,
    }
}

fn digit_char(digit: u32) -> char {
    let offset = match digit {
        0..=9 => u32::from(b'0') + digit,
        10..=35 => u32::from(b'a') + digit - 10,
        _ => u32::from(b'A') + digit - 36,
    };
    char::from_u32(offset).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_digit_values() {
        assert_eq!(encode("0").unwrap().value(), 0);
        assert_eq!(encode("9").unwrap().value(), 9);
        assert_eq!(encode("a").unwrap().value(), 10);
        assert_eq!(encode("z").unwrap().value(), 35);
        assert_eq!(encode("A").unwrap().value(), 36);
        assert_eq!(encode("Z").unwrap().value(), 61);
    }

    #[test]
    fn test_positional_encoding() {
        assert_eq!(encode("10").unwrap().value(), 62);
        assert_eq!(encode("c1").unwrap().value(), 12 * 62 + 1);
        assert_eq!(encode("ZZZZ").unwrap().value(), MAX_ID);
        assert_eq!(MAX_ID, 14_776_335);
    }

    #[test]
    fn test_decode_zero() {
        assert_eq!(CourseId::from_raw(0).unwrap().decode(), "0");
    }

    #[test]
    fn test_round_trip_single_and_pairs() {
        for a in ALPHABET.chars() {
            let code = a.to_string();
            assert_eq!(encode(&code).unwrap().decode(), code);
            for b in ALPHABET.chars() {
                if a == '0' {
                    continue;
                }
                let code = format!("{a}{b}");
                assert_eq!(encode(&code).unwrap().decode(), code);
            }
        }
    }

    #[test]
    fn test_round_trip_four_char_sample() {
        for code in ["CS1a", "zzzz", "1000", "A0b9", "Zz0Z", "m4X2"] {
            assert_eq!(decode(encode(code).unwrap()), code);
        }
    }

    #[test]
    fn test_round_trip_every_id() {
        for raw in (0..=MAX_ID).step_by(997) {
            let id = CourseId::from_raw(raw).unwrap();
            assert_eq!(encode(&id.decode()).unwrap(), id);
        }
    }

    #[test]
    fn test_rejects_invalid_codes() {
        assert_eq!(encode(""), Err(CodecError::Empty));
        assert!(matches!(
            encode("ABCDE"),
            Err(CodecError::TooLong { len: 5, .. })
        ));
        assert!(matches!(
            encode("c-1"),
            Err(CodecError::InvalidChar { ch: '-', .. })
        ));
        assert!(matches!(
            encode("é"),
            Err(CodecError::InvalidChar { ch: 'é', .. })
        ));
        assert!(matches!(encode("01"), Err(CodecError::LeadingZero { .. })));
    }

    #[test]
    fn test_from_raw_bounds() {
        assert!(CourseId::from_raw(MAX_ID).is_some());
        assert!(CourseId::from_raw(MAX_ID + 1).is_none());
    }

    #[test]
    fn test_display_and_from_str() {
        let id: CourseId = "c3".parse().unwrap();
        assert_eq!(id.to_string(), "c3");
    }
}
