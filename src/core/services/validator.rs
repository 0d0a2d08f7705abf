//! Card validator service - classifies a number and verifies its checksum
//!
//! This module contains pure validation logic with no I/O dependencies.
//!
//! # Examples
//!
//! ```
//! use cardcheck::core::services::CardValidator;
//!
//! let card = CardValidator::new("5105-1051-0510-5100");
//! assert!(card.is_valid());
//! assert_eq!(card.issuer(), "mastercard");
//!
//! // Right shape for mastercard, wrong checksum
//! let card = CardValidator::new("5105105125105100");
//! assert_eq!(card.issuer(), "");
//! ```

use std::cell::Cell;

use log::{debug, trace};

use super::classifier::classify;
use super::luhn::is_luhn_valid;
use crate::core::models::{CardNumber, IssuerScheme, ValidationResult, Verdict};

/// Validates one card number and remembers the outcome
///
/// The raw input is kept as supplied; normalization produces a separate
/// [`CardNumber`]. The last verdict is cached so [`CardValidator::issuer`]
/// after [`CardValidator::is_valid`] does not recompute the checksum.
#[derive(Debug, Clone)]
pub struct CardValidator {
    raw: String,
    number: CardNumber,
    verdict: Cell<Verdict>,
}

impl CardValidator {
    /// Create a validator for `raw`, which may contain hyphens
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let number = CardNumber::normalize(&raw);
        Self {
            raw,
            number,
            verdict: Cell::new(Verdict::NotEvaluated),
        }
    }

    /// The input exactly as supplied
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized number
    #[must_use]
    pub const fn number(&self) -> &CardNumber {
        &self.number
    }

    /// The cached verdict, [`Verdict::NotEvaluated`] until validation runs
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict.get()
    }

    /// Run classification and the checksum, cache the verdict, and report
    /// validity
    ///
    /// A number no scheme matches is invalid. When a scheme matches, the
    /// checksum alone decides validity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.refresh().is_valid()
    }

    /// Matched scheme name for a valid number, `""` otherwise
    ///
    /// Validates first if that has not happened yet.
    #[must_use]
    pub fn issuer(&self) -> &'static str {
        self.scheme().map_or("", IssuerScheme::name)
    }

    /// Typed form of [`CardValidator::issuer`]
    #[must_use]
    pub fn scheme(&self) -> Option<IssuerScheme> {
        self.evaluated().issuer()
    }

    /// Snapshot of the evaluation, validating first if needed
    #[must_use]
    pub fn result(&self) -> ValidationResult {
        self.evaluated().into()
    }

    fn evaluated(&self) -> Verdict {
        let verdict = self.verdict.get();
        if verdict.is_evaluated() {
            trace!("reusing cached verdict for {}", self.number.masked());
            return verdict;
        }
        self.refresh()
    }

    fn refresh(&self) -> Verdict {
        let verdict = evaluate(&self.number);
        self.verdict.set(verdict);
        verdict
    }
}

/// Validate `raw` in one shot
#[must_use]
pub fn validate(raw: &str) -> ValidationResult {
    evaluate(&CardNumber::normalize(raw)).into()
}

fn evaluate(number: &CardNumber) -> Verdict {
    let Some(scheme) = classify(number) else {
        debug!("{} matches no issuer scheme", number.masked());
        return Verdict::Invalid { matched: None };
    };

    // classify only matches all-digit strings, so the checksum sees digits
    if is_luhn_valid(number.as_str()) {
        debug!("{} is a valid {scheme} number", number.masked());
        Verdict::Valid(scheme)
    } else {
        debug!("{} matches {scheme} but fails the checksum", number.masked());
        Verdict::Invalid {
            matched: Some(scheme),
        }
    }
}
