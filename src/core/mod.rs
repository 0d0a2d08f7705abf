//! Core domain logic for cardcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CardNumber`, `IssuerScheme`, `Verdict`)
//! - `services/` - Classification, checksum, and the validator itself

pub mod models;
pub mod services;
