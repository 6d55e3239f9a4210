//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! identity intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known-good identity codes, a pinned "today", and form answers
//! - `builders`: Builder patterns for test records and submissions
//! - `assertions`: Custom assertion helpers for validation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
