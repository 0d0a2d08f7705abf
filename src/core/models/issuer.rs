//! Issuer numbering schemes
//!
//! The set is closed and ordered: classification walks [`IssuerScheme::ALL`]
//! front to back and stops at the first scheme whose pattern matches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a scheme name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid issuer scheme: {0}. Use: visa, mastercard, discover, amex, diners, jcb")]
pub struct ParseSchemeError(pub String);

/// A card network numbering scheme (prefix + length rule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuerScheme {
    /// Visa: `4`, 13 or 16 digits
    Visa,
    /// Mastercard: `51`-`55`, 16 digits
    Mastercard,
    /// Discover: `6011` or `65`, 16 digits
    Discover,
    /// American Express: `34` or `37`, 15 digits
    Amex,
    /// Diners Club: `300`-`305`, `36` or `38` (14 digits), or a bare `3` (12 digits)
    Diners,
    /// JCB: `35` (16 digits), `2131` or `1800` (15 digits)
    Jcb,
}

impl IssuerScheme {
    /// All schemes in classification precedence order
    pub const ALL: [Self; 6] = [
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::Amex,
        Self::Diners,
        Self::Jcb,
    ];

    /// Lowercase scheme name as reported by the validator
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Discover => "discover",
            Self::Amex => "amex",
            Self::Diners => "diners",
            Self::Jcb => "jcb",
        }
    }

    /// Anchored regular expression the normalized number must fully match
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Visa => r"^4[0-9]{12}(?:[0-9]{3})?$",
            Self::Mastercard => r"^5[1-5][0-9]{14}$",
            Self::Discover => r"^6(?:011|5[0-9]{2})[0-9]{12}$",
            Self::Amex => r"^3[47][0-9]{13}$",
            // The prefix group is optional, so a bare `3` + 11 digits also matches
            Self::Diners => r"^3(?:0[0-5]|[68][0-9])?[0-9]{11}$",
            Self::Jcb => r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$",
        }
    }

    /// Short human-readable description of the prefix/length rule
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Visa => "prefix 4, 13 or 16 digits",
            Self::Mastercard => "prefix 51-55, 16 digits",
            Self::Discover => "prefix 6011 or 65, 16 digits",
            Self::Amex => "prefix 34 or 37, 15 digits",
            Self::Diners => "prefix 300-305, 36 or 38 (14 digits), or 3 (12 digits)",
            Self::Jcb => "prefix 35 (16 digits), 2131 or 1800 (15 digits)",
        }
    }
}

impl std::fmt::Display for IssuerScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IssuerScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == lower)
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}
