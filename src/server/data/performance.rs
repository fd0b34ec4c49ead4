//! Performance summary data repository.
//!
//! Summaries are written with optimistic concurrency: every row carries a `version`, and
//! `compare_and_swap` only applies when the stored version still equals the one the caller
//! read. Together with the unique index on (user, dictation) this lets the attempt service
//! detect both a concurrent first insert and a concurrent update.

use crate::server::model::performance::{PerformanceSummary, SummaryStats};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct PerformanceSummaryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PerformanceSummaryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the first summary for a (user, dictation) pair with version 1.
    ///
    /// # Returns
    /// - `Ok(PerformanceSummary)` - The created summary
    /// - `Err(DbErr)` - Database error; a unique violation means another writer created the
    ///   summary first (check with `DbErr::sql_err`)
    pub async fn create(
        &self,
        user_id: i32,
        dictation_id: i32,
        stats: SummaryStats,
    ) -> Result<PerformanceSummary, DbErr> {
        let entity = entity::performance_summary::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            dictation_id: ActiveValue::Set(dictation_id),
            total_attempts: ActiveValue::Set(stats.total_attempts),
            best_accuracy: ActiveValue::Set(stats.best_accuracy),
            average_accuracy: ActiveValue::Set(stats.average_accuracy),
            average_time: ActiveValue::Set(stats.average_time),
            last_attempt_at: ActiveValue::Set(stats.last_attempt_at),
            version: ActiveValue::Set(1),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PerformanceSummary::from_entity(entity))
    }

    /// Finds the summary for a (user, dictation) pair.
    ///
    /// # Returns
    /// - `Ok(Some(PerformanceSummary))` - Summary exists
    /// - `Ok(None)` - No attempt has been recorded for the pair yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_dictation(
        &self,
        user_id: i32,
        dictation_id: i32,
    ) -> Result<Option<PerformanceSummary>, DbErr> {
        let entity = entity::prelude::PerformanceSummary::find()
            .filter(entity::performance_summary::Column::UserId.eq(user_id))
            .filter(entity::performance_summary::Column::DictationId.eq(dictation_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PerformanceSummary::from_entity))
    }

    /// Writes new statistics if the stored version still equals `expected_version`.
    ///
    /// The version is bumped by one on success.
    ///
    /// # Returns
    /// - `Ok(Some(PerformanceSummary))` - The write applied
    /// - `Ok(None)` - The row changed (or vanished) since it was read; nothing was written
    /// - `Err(DbErr)` - Database error during update
    pub async fn compare_and_swap(
        &self,
        id: i32,
        expected_version: i32,
        stats: SummaryStats,
    ) -> Result<Option<PerformanceSummary>, DbErr> {
        let result = entity::prelude::PerformanceSummary::update_many()
            .col_expr(
                entity::performance_summary::Column::TotalAttempts,
                Expr::value(stats.total_attempts),
            )
            .col_expr(
                entity::performance_summary::Column::BestAccuracy,
                Expr::value(stats.best_accuracy),
            )
            .col_expr(
                entity::performance_summary::Column::AverageAccuracy,
                Expr::value(stats.average_accuracy),
            )
            .col_expr(
                entity::performance_summary::Column::AverageTime,
                Expr::value(stats.average_time),
            )
            .col_expr(
                entity::performance_summary::Column::LastAttemptAt,
                Expr::value(stats.last_attempt_at),
            )
            .col_expr(
                entity::performance_summary::Column::Version,
                Expr::value(expected_version + 1),
            )
            .filter(entity::performance_summary::Column::Id.eq(id))
            .filter(entity::performance_summary::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let entity = entity::prelude::PerformanceSummary::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PerformanceSummary::from_entity))
    }

    /// Gets every summary for a user, most recently practiced first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<PerformanceSummary>, DbErr> {
        let entities = entity::prelude::PerformanceSummary::find()
            .filter(entity::performance_summary::Column::UserId.eq(user_id))
            .order_by_desc(entity::performance_summary::Column::LastAttemptAt)
            .order_by_desc(entity::performance_summary::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PerformanceSummary::from_entity)
            .collect())
    }

    /// Gets the `limit` most recently practiced summaries for a user
    pub async fn get_recent_by_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<PerformanceSummary>, DbErr> {
        let entities = entity::prelude::PerformanceSummary::find()
            .filter(entity::performance_summary::Column::UserId.eq(user_id))
            .order_by_desc(entity::performance_summary::Column::LastAttemptAt)
            .order_by_desc(entity::performance_summary::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PerformanceSummary::from_entity)
            .collect())
    }

    /// Deletes every summary for a dictation, returning how many rows were removed
    pub async fn delete_by_dictation(&self, dictation_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PerformanceSummary::delete_many()
            .filter(entity::performance_summary::Column::DictationId.eq(dictation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
