//! Actions produced by rule evaluation.

use crate::command::PumpCommand;

/// An effect the executor applies, in the order produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Publish a pump command on the actuator topic.
    PublishPump(PumpCommand),
    /// Record an alert and broadcast it on the alerts topic.
    RaiseAlert(String),
}
