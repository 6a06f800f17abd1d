//! trackwire gateway library entry.
//!
//! Wires the config layer, the webhook HTTP surface, the sink/store clients,
//! the monitoring runner, and the automated test suite. Consumed by the
//! binaries (`main.rs`, `bin/monitor.rs`, `bin/autotest.rs`, `bin/doctor.rs`)
//! and by integration tests.

pub mod app_state;
pub mod autotest;
pub mod config;
pub mod monitor;
pub mod router;
pub mod sink;
pub mod store;
pub mod webhook;
