//! MQTT adapter error types.

use std::time::Duration;

use sprout_domain::error::SproutError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client rejected or could not enqueue a request.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// The client did not accept a publish within the configured budget.
    #[error("MQTT publish timed out after {0:?}")]
    PublishTimeout(Duration),
}

impl MqttError {
    /// Convert into a [`SproutError::Bus`] for propagation across the
    /// port boundary.
    #[must_use]
    pub fn into_domain(self) -> SproutError {
        SproutError::Bus(Box::new(self))
    }
}

impl From<MqttError> for SproutError {
    fn from(err: MqttError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_publish_timeout_error() {
        let err = MqttError::PublishTimeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "MQTT publish timed out after 5s");
    }

    #[test]
    fn should_convert_to_bus_error() {
        let err: SproutError = MqttError::PublishTimeout(Duration::from_secs(5)).into();
        assert!(matches!(err, SproutError::Bus(_)));
    }
}
