//! Domain models for cardcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CardNumber`] - Raw input with separators removed
//! - [`IssuerScheme`] - A card network's prefix/length rule
//! - [`Verdict`] - Evaluation state held by a validator
//! - [`ValidationResult`] - Snapshot of one evaluation

mod card_number;
mod issuer;
mod verdict;

pub use card_number::{CardNumber, SEPARATOR};
pub use issuer::{IssuerScheme, ParseSchemeError};
pub use verdict::{ValidationResult, Verdict};
