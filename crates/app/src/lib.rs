//! # sprout-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `MessageBus` — publish payloads on bus topics
//!   - `EventStore` — append & query readings and alerts
//! - Provide the use-cases that orchestrate the domain:
//!   - `AutomationEngine` — evaluate the threshold rules
//!   - `ActionExecutor` — apply engine decisions through the ports
//!   - `Dispatcher` — decode, persist, evaluate, execute
//!
//! ## Dependency rule
//! Depends on `sprout-domain` only (plus `tokio` for time and `tracing`
//! for diagnostics). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod dispatcher;
pub mod engine;
pub mod executor;
pub mod ports;

mod timeout;
