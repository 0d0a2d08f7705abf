//! Issuer classification
//!
//! Tests a normalized number against each scheme's anchored pattern in
//! precedence order. First match wins; overlaps between schemes are not
//! resolved any further.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CardNumber, IssuerScheme};

/// Compiled scheme rules, in [`IssuerScheme::ALL`] order
static SCHEME_RULES: LazyLock<Vec<(IssuerScheme, Regex)>> = LazyLock::new(|| {
    IssuerScheme::ALL
        .into_iter()
        .map(|scheme| {
            let regex = Regex::new(scheme.pattern()).expect("scheme patterns are valid regexes");
            (scheme, regex)
        })
        .collect()
});

/// Find the first scheme whose pattern fully matches `number`
///
/// Returns `None` when nothing matches, including for empty input and input
/// containing non-digit characters.
#[must_use]
pub fn classify(number: &CardNumber) -> Option<IssuerScheme> {
    SCHEME_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(number.as_str()))
        .map(|(scheme, _)| *scheme)
}
