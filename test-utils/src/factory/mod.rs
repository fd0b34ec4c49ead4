//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and the
//! `helpers` module chains them for the common owner → dictation → attempt shapes.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let dictation = factory::dictation::create_dictation(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, dictation) = factory::helpers::create_dictation_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dictation = factory::dictation::DictationFactory::new(&db, user.id)
//!     .content("the quick brown fox")
//!     .language("en")
//!     .build()
//!     .await?;
//!
//! let attempt = factory::attempt::AttemptFactory::new(&db, user.id, dictation.id)
//!     .accuracy(50.0)
//!     .time_spent(12.5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `dictation` - Create text or audio dictation entities
//! - `attempt` - Create raw attempt rows (bypasses scoring and summaries)
//! - `performance_summary` - Create raw summary rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attempt;
pub mod dictation;
pub mod helpers;
pub mod performance_summary;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use attempt::create_attempt;
pub use dictation::create_dictation;
pub use performance_summary::create_performance_summary;
pub use user::create_user;
