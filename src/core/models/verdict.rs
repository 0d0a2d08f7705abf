//! Validation outcomes

use serde::Serialize;

use super::IssuerScheme;

/// State of a validator's evaluation
///
/// Keeps "never checked" apart from "checked and invalid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Validation has not run yet
    #[default]
    NotEvaluated,
    /// A scheme matched and the checksum passed
    Valid(IssuerScheme),
    /// Validation ran and failed
    Invalid {
        /// Scheme whose shape matched, if any (checksum failed)
        matched: Option<IssuerScheme>,
    },
}

impl Verdict {
    /// Whether validation has run
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::NotEvaluated)
    }

    /// Whether the number was found valid
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Issuer to report: only set for valid numbers
    #[must_use]
    pub const fn issuer(self) -> Option<IssuerScheme> {
        match self {
            Self::Valid(scheme) => Some(scheme),
            Self::NotEvaluated | Self::Invalid { .. } => None,
        }
    }

    /// Scheme whose pattern matched, regardless of checksum outcome
    #[must_use]
    pub const fn matched_scheme(self) -> Option<IssuerScheme> {
        match self {
            Self::Valid(scheme) => Some(scheme),
            Self::Invalid { matched } => matched,
            Self::NotEvaluated => None,
        }
    }
}

/// Snapshot of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Checksum-derived validity
    pub valid: bool,
    /// Scheme whose pattern matched, even if the checksum failed
    pub scheme: Option<IssuerScheme>,
}

impl ValidationResult {
    /// Issuer to report: the matched scheme, but only when valid
    #[must_use]
    pub const fn issuer(&self) -> Option<IssuerScheme> {
        if self.valid { self.scheme } else { None }
    }

    /// Issuer name, or `""` when there is none
    #[must_use]
    pub fn issuer_name(&self) -> &'static str {
        self.issuer().map_or("", IssuerScheme::name)
    }
}

impl From<Verdict> for ValidationResult {
    fn from(verdict: Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            scheme: verdict.matched_scheme(),
        }
    }
}
