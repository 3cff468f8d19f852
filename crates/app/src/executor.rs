//! Action executor — applies engine decisions through the ports.

use sprout_domain::action::Action;
use sprout_domain::alert::Alert;
use sprout_domain::error::SproutError;
use sprout_domain::topic;
use tracing::error;

use crate::ports::{EventStore, MessageBus};
use crate::timeout::{OP_BUDGET, bounded};

/// Applies actions through the store and the bus.
pub struct ActionExecutor<S, B> {
    store: S,
    bus: B,
}

impl<S, B> ActionExecutor<S, B>
where
    S: EventStore,
    B: MessageBus,
{
    /// Create an executor over the given ports.
    pub fn new(store: S, bus: B) -> Self {
        Self { store, bus }
    }

    /// Apply one action.
    ///
    /// An alert is appended to the store before it is broadcast, and a
    /// failed append does not suppress the broadcast. Publish failures
    /// are not retried here; reconnection is the bus adapter's concern.
    ///
    /// # Errors
    ///
    /// Returns the publish error, or [`SproutError::Timeout`] when the
    /// call overran its budget.
    pub async fn execute(&self, action: &Action) -> Result<(), SproutError> {
        match action {
            Action::PublishPump(cmd) => {
                bounded(
                    OP_BUDGET,
                    self.bus
                        .publish(topic::ACTUATOR_PUMP, cmd.as_str().as_bytes().to_vec()),
                )
                .await
            }
            Action::RaiseAlert(message) => {
                let alert = Alert::new(message.clone());
                if let Err(err) = bounded(OP_BUDGET, self.store.append_alert(&alert)).await {
                    error!(error = ?err, alert = %message, "failed to persist alert");
                }
                bounded(
                    OP_BUDGET,
                    self.bus.publish(topic::ALERTS, message.clone().into_bytes()),
                )
                .await
            }
        }
    }
}
