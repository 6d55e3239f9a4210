//! Core Kernel - Foundational types and utilities for identity intake
//!
//! This crate provides the building blocks shared by the domain and interface crates:
//! - Calendar helpers: the `Clock` port and whole-year age arithmetic
//! - Strongly-typed identifiers
//! - The kernel error type

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{Clock, SystemClock, FixedClock, TemporalError, age_on, days_in_month};
pub use identifiers::SessionId;
pub use error::CoreError;
