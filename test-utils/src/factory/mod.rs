//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! table has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let status = factory::create_status(&db, 42).await?;
//!
//! let subscription = factory::cc_subscription::SubscriptionFactory::new(&db)
//!     .tier("UU")
//!     .gen("ss")
//!     .cooldown(12)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `cc_status` - Tracked thread statuses
//! - `cc_subscription` - Alert channel subscriptions
//! - `cc_cooldown` - Alert cooldown rows
//! - `forum_thread` - Threads and prefix phrases in the forum tables
//! - `helpers` - Shared id generation

pub mod cc_cooldown;
pub mod cc_status;
pub mod cc_subscription;
pub mod forum_thread;
pub mod helpers;

pub use cc_cooldown::create_cooldown;
pub use cc_status::create_status;
pub use cc_subscription::create_subscription;
pub use forum_thread::{create_prefix, create_thread};
