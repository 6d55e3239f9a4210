//! Console Intake
//!
//! This crate drives the interactive collection of personal information on a
//! line-oriented console.
//!
//! # Architecture
//!
//! - **Session**: the prompt loop with per-field attempt limits
//! - **Summary**: the closing per-field overview, as text or JSON
//! - **Config**: `INTAKE_`-prefixed environment configuration
//!
//! Validation itself lives in `domain_identity`; this crate only decides
//! what to ask, in which order, and what to print.

pub mod config;
pub mod error;
pub mod session;
pub mod summary;

pub use config::{IntakeConfig, SummaryFormat};
pub use error::SessionError;
pub use session::{normalize, prompt_text, IntakeSession, SessionOutcome};
pub use summary::{FieldStatus, Summary, SummaryLine};
