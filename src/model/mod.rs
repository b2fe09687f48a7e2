//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that
//! SeaORM types never leak into the service layer. Forum threads are read from the
//! external forum database; everything else lives in the bot's own database.

pub mod cc_cooldown;
pub mod cc_status;
pub mod cc_subscription;
pub mod forum_node;
pub mod forum_thread;
pub mod stage;
