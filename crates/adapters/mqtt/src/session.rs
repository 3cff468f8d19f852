//! MQTT session lifecycle: connect, subscribe, deliver, publish.

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, Incoming, MqttOptions, QoS};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use sprout_app::ports::MessageBus;
use sprout_domain::error::SproutError;

use crate::config::MqttConfig;
use crate::error::MqttError;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// One message delivered by the broker, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

/// Handle to a live MQTT session.
///
/// Cloning is cheap; all clones share the same session.
#[derive(Clone)]
pub struct MqttBus {
    client: AsyncClient,
    publish_timeout: Duration,
}

impl MqttBus {
    /// Connect to the broker and spawn the session task.
    ///
    /// The returned receiver yields inbound messages in delivery order.
    /// The session task re-issues `subscriptions` on every `ConnAck`, so
    /// the subscription set survives reconnects, and it retries failed
    /// polls with bounded exponential backoff instead of giving up.
    #[must_use]
    pub fn connect(
        config: &MqttConfig,
        subscriptions: Vec<(String, QoS)>,
    ) -> (Self, mpsc::Receiver<InboundMessage>) {
        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));

        let (client, event_loop) = AsyncClient::new(options, config.channel_capacity);
        let (tx, rx) = mpsc::channel(config.channel_capacity);

        tokio::spawn(run_session(event_loop, client.clone(), subscriptions, tx));

        let bus = Self {
            client,
            publish_timeout: Duration::from_secs(u64::from(config.publish_timeout_secs)),
        };
        (bus, rx)
    }

    /// Disconnect cleanly so the broker can hand queued messages to the
    /// next session.
    ///
    /// # Errors
    ///
    /// Returns a bus error if the disconnect request cannot be enqueued.
    pub async fn disconnect(&self) -> Result<(), SproutError> {
        self.client
            .disconnect()
            .await
            .map_err(|err| MqttError::Client(err).into_domain())
    }
}

impl MessageBus for MqttBus {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), SproutError> {
        let send = self.client.publish(topic, QoS::AtMostOnce, false, payload);
        match tokio::time::timeout(self.publish_timeout, send).await {
            Ok(result) => result.map_err(|err| MqttError::Client(err).into_domain()),
            Err(_) => Err(MqttError::PublishTimeout(self.publish_timeout).into_domain()),
        }
    }
}

/// Double the retry delay, up to the cap.
fn next_backoff(current: Duration) -> Duration {
    (current * 2).min(MAX_BACKOFF)
}

/// Drive the rumqttc event loop until the daemon drops the receiver.
///
/// The same `ConnAck` path covers the first connect and every reconnect:
/// the full subscription set is re-issued before dispatch resumes.
async fn run_session(
    mut event_loop: EventLoop,
    client: AsyncClient,
    subscriptions: Vec<(String, QoS)>,
    tx: mpsc::Sender<InboundMessage>,
) {
    let mut backoff = INITIAL_BACKOFF;
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Incoming::ConnAck(_))) => {
                info!("connected to broker");
                backoff = INITIAL_BACKOFF;
                for (topic, qos) in &subscriptions {
                    if let Err(err) = client.subscribe(topic.clone(), *qos).await {
                        warn!(topic, error = ?err, "subscribe failed");
                    } else {
                        info!(topic, "subscribed");
                    }
                }
            }
            Ok(Event::Incoming(Incoming::Publish(publish))) => {
                let message = InboundMessage {
                    topic: publish.topic.clone(),
                    payload: publish.payload.to_vec(),
                };
                if tx.send(message).await.is_err() {
                    // Receiver dropped: the daemon is shutting down.
                    break;
                }
            }
            Ok(Event::Incoming(Incoming::Disconnect)) => {
                info!("broker closed the session");
            }
            Ok(_) => {}
            Err(err) => {
                if tx.is_closed() {
                    break;
                }
                warn!(error = ?err, delay = ?backoff, "poll failed, retrying");
                tokio::time::sleep(backoff).await;
                backoff = next_backoff(backoff);
            }
        }
    }
    debug!("session task stopped");
}
