//! Message bus port — outbound publishing.

use std::future::Future;

use sprout_domain::error::SproutError;

/// Publishes raw payloads on bus topics.
///
/// Subscription and delivery of inbound messages are owned by the bus
/// adapter; the application core only ever publishes.
pub trait MessageBus {
    /// Publish a payload on a topic.
    fn publish(
        &self,
        topic: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<(), SproutError>> + Send;
}

impl<T: MessageBus + Send + Sync> MessageBus for std::sync::Arc<T> {
    fn publish(
        &self,
        topic: &str,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<(), SproutError>> + Send {
        (**self).publish(topic, payload)
    }
}
