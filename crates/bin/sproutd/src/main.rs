//! # sproutd — sprout garden daemon
//!
//! Composition root that wires all adapters together and runs the
//! dispatch loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Connect the MQTT session and subscribe to the sensor topics
//! - Construct the dispatcher, injecting adapters via port traits
//! - Drive the dispatch loop until shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use rumqttc::QoS;
use sprout_adapter_mqtt::MqttBus;
use sprout_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteEventStore};
use sprout_app::dispatcher::Dispatcher;
use sprout_app::engine::AutomationEngine;
use sprout_domain::topic;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let store = SqliteEventStore::new(db.pool().clone());
    info!(url = config.database_url(), "database ready");

    // Broker session
    let subscriptions = topic::SUBSCRIBED
        .iter()
        .map(|name| ((*name).to_string(), QoS::AtMostOnce))
        .collect();
    let (bus, mut inbound) = MqttBus::connect(&config.broker, subscriptions);
    info!(
        host = %config.broker.broker_host,
        port = config.broker.broker_port,
        "broker session started"
    );

    // Dispatch loop
    let engine = AutomationEngine::new(config.automation);
    let dispatcher = Dispatcher::new(store, bus.clone(), engine);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("shutdown signal received");
                break;
            }
            message = inbound.recv() => match message {
                Some(message) => dispatcher.dispatch(&message.topic, &message.payload).await,
                None => {
                    warn!("broker session ended");
                    break;
                }
            },
        }
    }

    // Dropping the receiver lets the session task stop on its own.
    drop(inbound);
    if let Err(err) = bus.disconnect().await {
        warn!(error = ?err, "disconnect failed");
    }
    db.pool().close().await;
    info!("sproutd stopped");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
