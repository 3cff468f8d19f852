//! MQTT session configuration.

use serde::Deserialize;

/// Configuration for the MQTT session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// How long a publish may wait for the client before failing, in
    /// seconds.
    pub publish_timeout_secs: u16,
    /// Capacity of the inbound message queue.
    pub channel_capacity: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "sprout".to_string(),
            keep_alive_secs: 30,
            publish_timeout_secs: 5,
            channel_capacity: 64,
        }
    }
}
