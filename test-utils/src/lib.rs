//! Chatot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! C&C pipeline. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert rows with sensible defaults
//! - **fixture**: In-memory values that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::CcStatus;
//!
//! #[tokio::test]
//! async fn test_status_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(CcStatus)
//!         .with_forum_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
