//! # sprout-domain
//!
//! Pure domain model for the sprout garden automation daemon.
//!
//! ## Responsibilities
//! - Foundational types: timestamps, error conventions, topic names
//! - Define **Payloads** (decoded inbound message bodies)
//! - Define **Readings** and **Alerts** (append-only event records)
//! - Define **Commands** (actuator instructions such as pump on/off)
//! - Define **Thresholds** and **Actions** (rule inputs and outputs)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;
pub mod topic;

pub mod action;
pub mod alert;
pub mod command;
pub mod payload;
pub mod reading;
pub mod rule;
