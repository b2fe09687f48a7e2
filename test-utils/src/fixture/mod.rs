//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default
//! values used by the factories. Unlike factories, fixtures do NOT insert data into
//! the database.

pub mod cc_alert_chans;
pub mod cc_status;
