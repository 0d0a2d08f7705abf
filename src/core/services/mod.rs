//! Validation services
//!
//! Pure functions and the [`CardValidator`] built on them:
//!
//! - [`classifier`] - issuer scheme detection
//! - [`luhn`] - mod 10 checksum
//! - [`validator`] - composes both into a verdict

pub mod classifier;
pub mod luhn;
pub mod validator;

pub use classifier::classify;
pub use luhn::{check_digit, is_luhn_valid, luhn_sum};
pub use validator::{CardValidator, validate};
