//! Bus topic names for the garden network.
//!
//! Topic strings are fixed; peripherals and the dashboard agree on them
//! out of band. The daemon subscribes to the sensor and manual-control
//! topics and publishes on the actuator and alert topics.

/// Temperature/humidity readings from the DHT sensor.
pub const SENSORS_DHT: &str = "garden/sensors/dht";

/// Soil moisture readings.
pub const SENSORS_SOIL: &str = "garden/sensors/soil";

/// Manual override presses from the dashboard.
pub const CONTROL_MANUAL: &str = "garden/control/manual";

/// Pump commands to the actuator, plain text `ON` / `OFF`.
pub const ACTUATOR_PUMP: &str = "garden/actuators/pump";

/// Human-readable alert broadcasts.
pub const ALERTS: &str = "garden/alerts";

/// Topics the daemon subscribes to, in subscription order.
pub const SUBSCRIBED: [&str; 3] = [SENSORS_DHT, SENSORS_SOIL, CONTROL_MANUAL];
