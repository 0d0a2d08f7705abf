//! Normalized card numbers
//!
//! A [`CardNumber`] is derived from raw input by dropping separator
//! characters. It is not guaranteed to be all digits: any other characters
//! survive normalization and make classification fail later.
//!
//! # Examples
//!
//! ```
//! use cardcheck::core::models::CardNumber;
//!
//! let n = CardNumber::normalize("4111-1111-1111-1111");
//! assert_eq!(n.as_str(), "4111111111111111");
//! assert_eq!(n.masked(), "411111******1111");
//! ```

/// Separator stripped during normalization
pub const SEPARATOR: char = '-';

/// Leading characters left visible by [`CardNumber::masked`]
const VISIBLE_PREFIX: usize = 6;

/// Trailing characters left visible by [`CardNumber::masked`]
const VISIBLE_SUFFIX: usize = 4;

/// Shortest number that keeps its prefix visible when masked
const FULL_MASK_MIN_LEN: usize = 12;

/// A card number with separators removed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Build a card number from raw input, removing every separator
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(|&c| c != SEPARATOR).collect())
    }

    /// The normalized number
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters after normalization
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether nothing remained after normalization
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the number is non-empty and made only of ASCII digits
    #[must_use]
    pub fn is_all_digits(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Render the number for display with the middle replaced by `*`
    ///
    /// Numbers of 12 or more characters keep their first six and last four
    /// characters. Shorter numbers keep only the last four, and numbers of
    /// four characters or fewer are masked entirely.
    #[must_use]
    pub fn masked(&self) -> String {
        let len = self.len();
        let (head, tail) = if len >= FULL_MASK_MIN_LEN {
            (VISIBLE_PREFIX, VISIBLE_SUFFIX)
        } else if len > VISIBLE_SUFFIX {
            (0, VISIBLE_SUFFIX)
        } else {
            (0, 0)
        };

        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| if i < head || i >= len - tail { c } else { '*' })
            .collect()
    }
}

impl From<&str> for CardNumber {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl AsRef<str> for CardNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
