//! # sprout-adapter-mqtt
//!
//! MQTT adapter — connects sprout to the garden broker via
//! [rumqttc](https://docs.rs/rumqttc).
//!
//! ## Responsibilities
//! - Own the broker session: connect, keep-alive, reconnect with backoff
//! - Re-issue the subscription set on every `ConnAck`
//! - Queue inbound publishes, in delivery order, for the dispatch loop
//! - Implement the `MessageBus` port for outbound publishes
//!
//! ## Dependency rule
//! Same as other adapters: depends on `sprout-app` and `sprout-domain`.

pub mod config;
pub mod error;
pub mod session;

pub use config::MqttConfig;
pub use error::MqttError;
pub use session::{InboundMessage, MqttBus};
