//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// usernames, emails and titles to prevent unique constraint collisions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a text dictation owned by that user.
///
/// The dictation uses the factory default content `"hello world"`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, dictation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dictation_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::dictation::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let dictation = crate::factory::dictation::create_dictation(db, user.id).await?;

    Ok((user, dictation))
}

/// Creates a user, a dictation and `count` raw attempts on it.
///
/// Attempts are numbered 1..=count. No performance summary is created; use the
/// attempt service when summary maintenance is part of the test.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of attempts to insert
///
/// # Returns
/// - `Ok((user, dictation, attempts))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dictation_with_attempts(
    db: &DatabaseConnection,
    count: i32,
) -> Result<
    (
        entity::user::Model,
        entity::dictation::Model,
        Vec<entity::attempt::Model>,
    ),
    DbErr,
> {
    let (user, dictation) = create_dictation_with_owner(db).await?;

    let mut attempts = Vec::with_capacity(count.max(0) as usize);
    for attempt_no in 1..=count {
        let attempt = crate::factory::attempt::AttemptFactory::new(db, user.id, dictation.id)
            .attempt_no(attempt_no)
            .build()
            .await?;
        attempts.push(attempt);
    }

    Ok((user, dictation, attempts))
}
