//! Dispatcher — the per-message use-case: decode, persist, evaluate,
//! execute.

use sprout_domain::payload::Payload;
use sprout_domain::reading::Reading;
use sprout_domain::topic;
use tracing::{debug, error};

use crate::engine::AutomationEngine;
use crate::executor::ActionExecutor;
use crate::ports::{EventStore, MessageBus};
use crate::timeout::{OP_BUDGET, bounded};

/// Routes one inbound message through persistence and automation.
///
/// The dispatch loop must survive any single bad message, so
/// [`Dispatcher::dispatch`] never returns an error: every failure is
/// logged and handling continues.
pub struct Dispatcher<S, B> {
    store: S,
    engine: AutomationEngine,
    executor: ActionExecutor<S, B>,
}

impl<S, B> Dispatcher<S, B>
where
    S: EventStore + Clone,
    B: MessageBus,
{
    /// Wire a dispatcher over the given ports.
    pub fn new(store: S, bus: B, engine: AutomationEngine) -> Self {
        let executor = ActionExecutor::new(store.clone(), bus);
        Self {
            store,
            engine,
            executor,
        }
    }

    /// Handle one inbound message end to end.
    ///
    /// The reading is appended before any automation runs; a storage
    /// failure is logged and automation still proceeds. A failed action
    /// does not stop the remaining ones.
    pub async fn dispatch(&self, topic: &str, raw: &[u8]) {
        let payload = Payload::decode(raw);
        debug!(topic, ?payload, "message received");

        let reading = Reading::new(topic, payload);
        if let Err(err) = bounded(OP_BUDGET, self.store.append_reading(&reading)).await {
            error!(topic, error = ?err, "failed to persist reading");
        }

        if !topic::SUBSCRIBED.contains(&topic) {
            debug!(topic, "no rules for topic, stored only");
            return;
        }

        for action in self.engine.evaluate(topic, &reading.payload) {
            if let Err(err) = self.executor.execute(&action).await {
                error!(topic, ?action, error = ?err, "action failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    use sprout_domain::alert::Alert;
    use sprout_domain::error::SproutError;
    use sprout_domain::rule::Thresholds;

    use super::*;

    type Ops = Arc<Mutex<Vec<String>>>;

    #[derive(Clone, Default)]
    struct FakeStore {
        readings: Arc<Mutex<Vec<Reading>>>,
        alerts: Arc<Mutex<Vec<Alert>>>,
        fail_readings: bool,
        ops: Ops,
    }

    impl EventStore for FakeStore {
        fn append_reading(
            &self,
            reading: &Reading,
        ) -> impl Future<Output = Result<(), SproutError>> + Send {
            self.ops.lock().unwrap().push("append_reading".to_string());
            let result = if self.fail_readings {
                Err(SproutError::storage(std::io::Error::other("disk full")))
            } else {
                self.readings.lock().unwrap().push(reading.clone());
                Ok(())
            };
            async move { result }
        }

        fn append_alert(
            &self,
            alert: &Alert,
        ) -> impl Future<Output = Result<(), SproutError>> + Send {
            self.ops.lock().unwrap().push("append_alert".to_string());
            self.alerts.lock().unwrap().push(alert.clone());
            async { Ok(()) }
        }

        fn recent_readings(
            &self,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<Reading>, SproutError>> + Send {
            let found: Vec<_> = self
                .readings
                .lock()
                .unwrap()
                .iter()
                .rev()
                .take(limit)
                .cloned()
                .collect();
            async move { Ok(found) }
        }

        fn recent_alerts(
            &self,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<Alert>, SproutError>> + Send {
            let found: Vec<_> = self
                .alerts
                .lock()
                .unwrap()
                .iter()
                .rev()
                .take(limit)
                .cloned()
                .collect();
            async move { Ok(found) }
        }
    }

    #[derive(Clone, Default)]
    struct SpyBus {
        published: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
        ops: Ops,
    }

    impl MessageBus for SpyBus {
        fn publish(
            &self,
            topic: &str,
            payload: Vec<u8>,
        ) -> impl Future<Output = Result<(), SproutError>> + Send {
            self.ops.lock().unwrap().push(format!("publish {topic}"));
            let result = if self.fail {
                Err(SproutError::bus(std::io::Error::other("broker gone")))
            } else {
                self.published.lock().unwrap().push((
                    topic.to_string(),
                    String::from_utf8_lossy(&payload).into_owned(),
                ));
                Ok(())
            };
            async move { result }
        }
    }

    fn make(store: FakeStore, bus: SpyBus) -> Dispatcher<FakeStore, SpyBus> {
        Dispatcher::new(store, bus, AutomationEngine::new(Thresholds::default()))
    }

    #[tokio::test]
    async fn should_persist_reading_before_any_action() {
        let ops = Ops::default();
        let store = FakeStore {
            ops: ops.clone(),
            ..FakeStore::default()
        };
        let bus = SpyBus {
            ops: ops.clone(),
            ..SpyBus::default()
        };
        let dispatcher = make(store, bus);

        dispatcher
            .dispatch(topic::SENSORS_SOIL, br#"{"moisture": 12}"#)
            .await;

        let ops = ops.lock().unwrap();
        assert_eq!(
            *ops,
            [
                "append_reading",
                "publish garden/actuators/pump",
                "append_alert",
                "publish garden/alerts",
            ]
        );
    }

    #[tokio::test]
    async fn should_wrap_undecodable_payload_as_raw() {
        let store = FakeStore::default();
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher.dispatch(topic::SENSORS_DHT, b"hello").await;

        let readings = store.readings.lock().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].payload, Payload::Raw("hello".to_string()));
        assert_eq!(
            readings[0].payload.to_stored_json(),
            serde_json::json!({"raw": "hello"})
        );
        assert!(bus.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_run_automation_when_persistence_fails() {
        let store = FakeStore {
            fail_readings: true,
            ..FakeStore::default()
        };
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher
            .dispatch(topic::SENSORS_SOIL, br#"{"moisture": 12}"#)
            .await;

        let published = bus.published.lock().unwrap();
        assert_eq!(published[0], ("garden/actuators/pump".to_string(), "ON".to_string()));
        assert_eq!(store.alerts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_not_stop_remaining_actions_when_publish_fails() {
        let store = FakeStore::default();
        let bus = SpyBus {
            fail: true,
            ..SpyBus::default()
        };
        let dispatcher = make(store.clone(), bus);

        dispatcher
            .dispatch(topic::SENSORS_SOIL, br#"{"moisture": 12}"#)
            .await;

        // The pump publish failed, but the alert action still appended.
        let alerts = store.alerts.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Auto: Published pump ON because soil=12%");
    }

    #[tokio::test]
    async fn should_store_and_ignore_unknown_topic() {
        let store = FakeStore::default();
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher.dispatch("garden/status/pump", b"ON").await;

        assert_eq!(store.readings.lock().unwrap().len(), 1);
        assert!(store.alerts.lock().unwrap().is_empty());
        assert!(bus.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_handle_manual_control_in_order() {
        let store = FakeStore::default();
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher.dispatch(topic::CONTROL_MANUAL, b"pressed").await;

        let published = bus.published.lock().unwrap();
        assert_eq!(
            *published,
            [
                (
                    "garden/alerts".to_string(),
                    "Manual control event received".to_string()
                ),
                ("garden/actuators/pump".to_string(), "ON".to_string()),
            ]
        );
        assert_eq!(store.alerts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_publish_high_temperature_alert() {
        let store = FakeStore::default();
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher
            .dispatch(topic::SENSORS_DHT, br#"{"temp": 40.1, "hum": 55}"#)
            .await;

        let published = bus.published.lock().unwrap();
        assert_eq!(
            *published,
            [(
                "garden/alerts".to_string(),
                "WARNING: High temperature 40.1C".to_string()
            )]
        );
        let alerts = store.alerts.lock().unwrap();
        assert_eq!(alerts[0].message, "WARNING: High temperature 40.1C");
    }

    #[tokio::test]
    async fn should_publish_pump_off_for_wet_soil() {
        let store = FakeStore::default();
        let bus = SpyBus::default();
        let dispatcher = make(store.clone(), bus.clone());

        dispatcher
            .dispatch(topic::SENSORS_SOIL, br#"{"moisture": 80}"#)
            .await;

        let published = bus.published.lock().unwrap();
        assert_eq!(
            *published,
            [("garden/actuators/pump".to_string(), "OFF".to_string())]
        );
        assert!(store.alerts.lock().unwrap().is_empty());
    }
}
