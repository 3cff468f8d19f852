//! Alert — a human-readable warning record.

use crate::time::{self, Timestamp};

/// A warning raised by automation, appended to the alert log and
/// broadcast on the alerts topic. Never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub timestamp: Timestamp,
    pub message: String,
}

impl Alert {
    /// Create an alert stamped with the current time.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: time::now(),
            message: message.into(),
        }
    }
}
