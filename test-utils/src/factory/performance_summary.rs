//! Performance summary factory for inserting raw summary rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test performance summaries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::performance_summary::PerformanceSummaryFactory;
///
/// let summary = PerformanceSummaryFactory::new(&db, user.id, dictation.id)
///     .total_attempts(3)
///     .average_accuracy(80.0)
///     .build()
///     .await?;
/// ```
pub struct PerformanceSummaryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    dictation_id: i32,
    total_attempts: i32,
    best_accuracy: f64,
    average_accuracy: f64,
    average_time: f64,
    last_attempt_at: chrono::DateTime<Utc>,
}

impl<'a> PerformanceSummaryFactory<'a> {
    /// Creates a new PerformanceSummaryFactory with default values.
    ///
    /// Defaults:
    /// - total_attempts: `1`
    /// - best_accuracy: `92.5`
    /// - average_accuracy: `88.0`
    /// - average_time: `12.3`
    /// - last_attempt_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32, dictation_id: i32) -> Self {
        Self {
            db,
            user_id,
            dictation_id,
            total_attempts: 1,
            best_accuracy: 92.5,
            average_accuracy: 88.0,
            average_time: 12.3,
            last_attempt_at: Utc::now(),
        }
    }

    /// Sets the attempt count.
    pub fn total_attempts(mut self, total_attempts: i32) -> Self {
        self.total_attempts = total_attempts;
        self
    }

    /// Sets the best accuracy.
    pub fn best_accuracy(mut self, best_accuracy: f64) -> Self {
        self.best_accuracy = best_accuracy;
        self
    }

    /// Sets the average accuracy.
    pub fn average_accuracy(mut self, average_accuracy: f64) -> Self {
        self.average_accuracy = average_accuracy;
        self
    }

    /// Sets the timestamp of the most recent attempt.
    pub fn last_attempt_at(mut self, last_attempt_at: chrono::DateTime<Utc>) -> Self {
        self.last_attempt_at = last_attempt_at;
        self
    }

    /// Builds and inserts the summary entity with version `1`.
    ///
    /// # Returns
    /// - `Ok(entity::performance_summary::Model)` - Created summary entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate pair)
    pub async fn build(self) -> Result<entity::performance_summary::Model, DbErr> {
        entity::performance_summary::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            dictation_id: ActiveValue::Set(self.dictation_id),
            total_attempts: ActiveValue::Set(self.total_attempts),
            best_accuracy: ActiveValue::Set(self.best_accuracy),
            average_accuracy: ActiveValue::Set(self.average_accuracy),
            average_time: ActiveValue::Set(self.average_time),
            last_attempt_at: ActiveValue::Set(self.last_attempt_at),
            version: ActiveValue::Set(1),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a summary with default values for the given pair.
pub async fn create_performance_summary(
    db: &DatabaseConnection,
    user_id: i32,
    dictation_id: i32,
) -> Result<entity::performance_summary::Model, DbErr> {
    PerformanceSummaryFactory::new(db, user_id, dictation_id)
        .build()
        .await
}
