//! Property-based tests for the validator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use cardcheck::core::models::IssuerScheme;
use cardcheck::core::services::{check_digit, is_luhn_valid};
use cardcheck::{CardValidator, validate};
use proptest::prelude::*;

use crate::common::{flip_digit, hyphenate, with_check_digit};

/// Payload patterns (all but the check digit) for each scheme
fn scheme_payload() -> impl Strategy<Value = (IssuerScheme, String)> {
    prop_oneof![
        "4[0-9]{14}".prop_map(|p| (IssuerScheme::Visa, p)),
        "4[0-9]{11}".prop_map(|p| (IssuerScheme::Visa, p)),
        "5[1-5][0-9]{13}".prop_map(|p| (IssuerScheme::Mastercard, p)),
        "6011[0-9]{11}".prop_map(|p| (IssuerScheme::Discover, p)),
        "65[0-9]{13}".prop_map(|p| (IssuerScheme::Discover, p)),
        "3[47][0-9]{12}".prop_map(|p| (IssuerScheme::Amex, p)),
        "30[0-5][0-9]{10}".prop_map(|p| (IssuerScheme::Diners, p)),
        "3[68][0-9]{11}".prop_map(|p| (IssuerScheme::Diners, p)),
        "35[0-9]{13}".prop_map(|p| (IssuerScheme::Jcb, p)),
    ]
}

proptest! {
    /// A Luhn-completed number of the right shape is valid for its scheme
    #[test]
    fn completed_numbers_are_valid((scheme, payload) in scheme_payload()) {
        let number = with_check_digit(&payload);
        let card = CardValidator::new(number.as_str());
        prop_assert!(card.is_valid());
        prop_assert_eq!(card.issuer(), scheme.name());
    }

    /// Changing any one digit of a valid number makes it invalid
    #[test]
    fn single_digit_change_is_invalid(
        (_scheme, payload) in scheme_payload(),
        pos in 0usize..16,
        bump in 0u8..9
    ) {
        let number = with_check_digit(&payload);
        let pos = pos % number.len();
        let flipped = flip_digit(&number, pos, bump);
        prop_assert_ne!(&flipped, &number);
        prop_assert!(!CardValidator::new(flipped.as_str()).is_valid());
    }

    /// Hyphens never change the verdict
    #[test]
    fn hyphens_are_ignored(number in "[0-9]{12,19}", every in 1usize..6) {
        prop_assert_eq!(validate(&hyphenate(&number, every)), validate(&number));
    }

    /// A non-digit, non-hyphen character anywhere makes the number invalid
    #[test]
    fn non_digit_is_invalid(
        (_scheme, payload) in scheme_payload(),
        pos in 0usize..16,
        junk in "[a-zA-Z ./+#_]"
    ) {
        let mut number = with_check_digit(&payload);
        let pos = pos % (number.len() + 1);
        number.insert_str(pos, &junk);
        let card = CardValidator::new(number.as_str());
        prop_assert!(!card.is_valid());
        prop_assert_eq!(card.issuer(), "");
    }

    /// The computed check digit always completes a Luhn-valid number
    #[test]
    fn check_digit_completes_payload(payload in "[0-9]{1,30}") {
        let digit = check_digit(&payload).unwrap();
        prop_assert!(digit <= 9);
        let full = format!("{payload}{digit}");
        prop_assert!(is_luhn_valid(&full));
    }

    /// Arbitrary input never panics and invalid numbers report no issuer
    #[test]
    fn arbitrary_input_is_total(raw in "\\PC{0,24}") {
        let card = CardValidator::new(raw.as_str());
        if !card.is_valid() {
            prop_assert_eq!(card.issuer(), "");
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn completed_visa_13() {
        let number = with_check_digit("422222222222");
        assert_eq!(number, "4222222222222");
        assert!(CardValidator::new(number.as_str()).is_valid());
    }

    #[test]
    fn flipped_known_vector() {
        let flipped = flip_digit("4111111111111111", 15, 0);
        assert_eq!(flipped, "4111111111111112");
        assert!(!CardValidator::new(flipped.as_str()).is_valid());
    }
}
