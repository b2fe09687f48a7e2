//! Service layer for business logic and orchestration.
//!
//! Services sit between the schedulers and bot handlers on one side and the data
//! (repository) layer on the other. They are responsible for:
//!
//! - **Business Logic**: Parsing, diffing and alerting rules of the C&C pipeline
//! - **Orchestration**: Coordinating repository calls and Discord delivery
//! - **Domain Models**: Working with domain models rather than entity models

pub mod cc_alert;
pub mod cc_cache;
pub mod cc_diff;
pub mod cc_parse;
pub mod cc_subscription;
pub mod cc_sync;
