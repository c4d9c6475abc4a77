//! English ordinal numbers.

use std::fmt::{self, Display};

/// A number displayed with its English ordinal suffix.
///
/// # Examples
///
/// ```
/// use miscs_core::Ordinal;
///
/// assert_eq!(Ordinal(1).to_string(), "1st");
/// assert_eq!(Ordinal(12).to_string(), "12th");
/// assert_eq!(format!("the {} attempt", Ordinal(23)), "the 23rd attempt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(pub u64);

impl Ordinal {
    /// Returns the suffix (`"st"`, `"nd"`, `"rd"` or `"th"`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        let n = self.0;
        // 11, 12 and 13 (and 111, 212, ...) always take "th"
        if n / 10 % 10 == 1 {
            return "th";
        }
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    }
}

impl Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.suffix())
    }
}

impl From<u64> for Ordinal {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

/// Returns `n` formatted as an ordinal number.
///
/// # Examples
///
/// ```
/// use miscs_core::ordinal_number;
///
/// assert_eq!(ordinal_number(1), "1st");
/// assert_eq!(ordinal_number(4), "4th");
/// assert_eq!(ordinal_number(21), "21st");
/// ```
#[must_use]
pub fn ordinal_number(n: u64) -> String {
    Ordinal(n).to_string()
}
