//! Dictation Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dictation
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, either from individual entity tables or from the full migrated schema.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_attempt_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_dictation_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
