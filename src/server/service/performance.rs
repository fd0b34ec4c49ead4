//! Read access to performance summaries.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::performance::PerformanceSummaryRepository, error::AppError,
    model::performance::PerformanceSummary,
};

/// Number of summaries returned by the recent feed when no limit is given.
pub const DEFAULT_RECENT_LIMIT: u64 = 10;
/// Largest limit the recent feed accepts.
pub const MAX_RECENT_LIMIT: u64 = 100;

pub struct PerformanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PerformanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every summary for a user, most recently practiced first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<PerformanceSummary>, AppError> {
        Ok(PerformanceSummaryRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Lists a user's most recently practiced summaries.
    ///
    /// `limit` defaults to `DEFAULT_RECENT_LIMIT` and is clamped to `1..=MAX_RECENT_LIMIT`.
    pub async fn get_recent(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PerformanceSummary>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);

        Ok(PerformanceSummaryRepository::new(self.db)
            .get_recent_by_user(user_id, limit)
            .await?)
    }
}
