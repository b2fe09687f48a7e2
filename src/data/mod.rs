//! Database repository layer.
//!
//! Repositories handle all database operations for the pipeline. They use SeaORM
//! entity models internally and return domain models to keep the service layer free
//! of database types. `ForumThreadRepository` reads from the external forum database;
//! the other repositories own the bot's tables.

pub mod cc_cooldown;
pub mod cc_status;
pub mod cc_subscription;
pub mod cc_timestamp;
pub mod forum_thread;

#[cfg(test)]
mod test;
