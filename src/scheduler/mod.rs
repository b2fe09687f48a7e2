//! Background drivers of the C&C pipeline.
//!
//! - `cc_sync` - Self-rescheduling poll loop
//! - `cooldown_sweep` - Hourly cleanup of expired alert cooldowns
//! - `lockout` - Busy flag shared by the poll loop and the admin resync

pub mod cc_sync;
pub mod cooldown_sweep;
pub mod lockout;
