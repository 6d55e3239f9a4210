//! Intake session identifiers
//!
//! Every run of the prompt loop is tagged with a `SessionId` so all log lines
//! from one session can be correlated.

use std::fmt;
use uuid::Uuid;

/// Time-ordered identifier of one intake session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SES-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_prefixed_uuid() {
        let id = SessionId::new_v7();
        assert_eq!(id.to_string(), format!("SES-{}", id.as_uuid()));
    }

    #[test]
    fn test_ids_are_version_seven_and_distinct() {
        let first = SessionId::new_v7();
        let second = SessionId::new_v7();
        assert_eq!(first.as_uuid().get_version_num(), 7);
        assert_ne!(first, second);
    }
}
