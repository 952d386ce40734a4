//! One-decimal GPA formatting

use std::fmt;

/// GPA stored as an integer scaled by 100 (e.g., 242 for 2.42)
///
/// Displays as `I.D`, rounding the hundredths digit half up and carrying a
/// rounded-up `.9` into the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gpa(u64);

impl Gpa {
    /// Wrap a GPA scaled by 100
    #[must_use]
    pub const fn new(gpa100: u64) -> Self {
        Self(gpa100)
    }

    /// Integer part and single rounded decimal digit
    #[must_use]
    pub const fn rounded(self) -> (u64, u64) {
        let mut integer = self.0 / 100;
        let mut tenths = self.0 % 100 / 10;
        if self.0 % 10 >= 5 {
            tenths += 1;
        }
        if tenths == 10 {
            tenths = 0;
            integer += 1;
        }
        (integer, tenths)
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (integer, tenths) = self.rounded();
        write!(f, "{integer}.{tenths}")
    }
}
