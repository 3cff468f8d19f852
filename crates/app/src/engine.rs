//! Automation engine — threshold rules over decoded payloads.
//!
//! Evaluation is pure: no IO, no state beyond the configured thresholds.
//! The engine decides, the [`ActionExecutor`](crate::executor::ActionExecutor)
//! applies.

use sprout_domain::action::Action;
use sprout_domain::command::PumpCommand;
use sprout_domain::payload::Payload;
use sprout_domain::rule::Thresholds;
use sprout_domain::topic;

/// Evaluates the fixed rule set against one decoded message.
#[derive(Debug, Clone)]
pub struct AutomationEngine {
    thresholds: Thresholds,
}

impl AutomationEngine {
    /// Create an engine with the given thresholds.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Decide the actions for one message, in execution order.
    ///
    /// Unknown topics and payloads without the expected numeric keys
    /// produce no actions.
    #[must_use]
    pub fn evaluate(&self, topic: &str, payload: &Payload) -> Vec<Action> {
        match topic {
            topic::SENSORS_DHT => self.evaluate_dht(payload),
            topic::SENSORS_SOIL => self.evaluate_soil(payload),
            topic::CONTROL_MANUAL => vec![
                Action::RaiseAlert("Manual control event received".to_string()),
                Action::PublishPump(PumpCommand::On),
            ],
            _ => Vec::new(),
        }
    }

    fn evaluate_dht(&self, payload: &Payload) -> Vec<Action> {
        let Some(temp) = payload.number("temp") else {
            return Vec::new();
        };
        if temp
            .as_f64()
            .is_some_and(|t| t > self.thresholds.temp_warning)
        {
            // JSON numbers keep their source rendering: 40.1 stays "40.1", 40 stays "40".
            vec![Action::RaiseAlert(format!(
                "WARNING: High temperature {temp}C"
            ))]
        } else {
            Vec::new()
        }
    }

    fn evaluate_soil(&self, payload: &Payload) -> Vec<Action> {
        let Some(moisture) = payload.number("moisture") else {
            return Vec::new();
        };
        let Some(value) = moisture.as_f64() else {
            return Vec::new();
        };
        if value < self.thresholds.soil_threshold {
            vec![
                Action::PublishPump(PumpCommand::On),
                Action::RaiseAlert(format!("Auto: Published pump ON because soil={moisture}%")),
            ]
        } else {
            // At or above threshold the OFF command is republished every
            // reading; there is no hysteresis band.
            vec![Action::PublishPump(PumpCommand::Off)]
        }
    }
}
