//! Session error handling

use domain_identity::RecordError;
use thiserror::Error;

/// Failures that end an intake session without an outcome
///
/// Invalid answers are not errors here: they are reported to the user and
/// retried, and running out of attempts is a normal `SessionOutcome`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record assembly error: {0}")]
    Record(#[from] RecordError),

    #[error("Summary serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
