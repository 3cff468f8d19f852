//! # sprout-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `EventStore` port defined in `sprout-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `sprout-app` (for the port trait) and `sprout-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod event_store;
pub mod pool;

pub use error::StorageError;
pub use event_store::SqliteEventStore;
pub use pool::{Config, Database};
