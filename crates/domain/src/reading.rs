//! Reading — an immutable record of one inbound bus message.

use crate::payload::Payload;
use crate::time::{self, Timestamp};

/// One message received from the bus, as appended to the event log.
///
/// Readings are never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: Timestamp,
    pub topic: String,
    pub payload: Payload,
}

impl Reading {
    /// Create a reading stamped with the current time.
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: Payload) -> Self {
        Self {
            timestamp: time::now(),
            topic: topic.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_new_reading_with_current_time() {
        let before = time::now();
        let reading = Reading::new("garden/sensors/soil", Payload::Raw("x".to_string()));
        assert!(reading.timestamp >= before);
        assert_eq!(reading.topic, "garden/sensors/soil");
    }
}
