//! cardcheck - Payment card number validation
//!
//! Decides whether a card number is syntactically and arithmetically
//! plausible: it must match one issuer numbering scheme and pass the Luhn
//! checksum. No network lookups, expiry or CVV checks are performed.
//!
//! ```
//! use cardcheck::CardValidator;
//!
//! let card = CardValidator::new("4111-1111-1111-1111");
//! assert!(card.is_valid());
//! assert_eq!(card.issuer(), "visa");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{CardNumber, IssuerScheme, ValidationResult, Verdict};
pub use crate::core::services::{CardValidator, validate};
