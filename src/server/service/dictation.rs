//! Dictation service.
//!
//! Besides plain CRUD this owns the cascade delete: a dictation is removed together with
//! every performance summary and attempt that references it, in one transaction.

use std::time::Duration;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    config::DEFAULT_TRANSACTION_TIMEOUT_SECS,
    data::{
        attempt::AttemptRepository, dictation::DictationRepository,
        performance::PerformanceSummaryRepository,
    },
    error::AppError,
    model::dictation::{CreateDictationParams, Dictation, DictationKind},
    util::transaction::with_deadline,
};

pub struct DictationService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> DictationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            timeout: Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECS),
        }
    }

    /// Sets the deadline for the cascade-delete transaction.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates a dictation
    pub async fn create(&self, params: CreateDictationParams) -> Result<Dictation, AppError> {
        let dictation = DictationRepository::new(self.db).create(params).await?;

        tracing::info!(
            dictation_id = dictation.id,
            user_id = dictation.user_id,
            kind = %dictation.kind,
            "Created dictation"
        );

        Ok(dictation)
    }

    /// Gets a dictation by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dictation>, AppError> {
        Ok(DictationRepository::new(self.db).find_by_id(id).await?)
    }

    /// Lists a user's dictations, optionally restricted to one kind
    pub async fn get_by_user(
        &self,
        user_id: i32,
        kind: Option<DictationKind>,
    ) -> Result<Vec<Dictation>, AppError> {
        Ok(DictationRepository::new(self.db)
            .get_by_user(user_id, kind)
            .await?)
    }

    /// Deletes a dictation with all of its summaries and attempts.
    ///
    /// Summaries go first, then attempts, then the dictation, all in one transaction. A
    /// failure at any step rolls back every step. The deadline bounds the deletes only; the
    /// commit runs after it. Ownership is not checked here; callers authorize first.
    ///
    /// # Returns
    /// - `Ok(true)` - Dictation and dependents deleted
    /// - `Ok(false)` - No dictation with that ID
    /// - `Err(AppError::TransactionAborted)` - Deadline exceeded; nothing was deleted
    /// - `Err(AppError::DbErr)` - Storage failure; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let (txn, deleted) = with_deadline(self.timeout, self.delete_atomic(id)).await?;
        txn.commit().await?;

        if deleted.found {
            tracing::info!(
                dictation_id = id,
                attempts = deleted.attempts,
                summaries = deleted.summaries,
                "Deleted dictation"
            );
        }

        Ok(deleted.found)
    }

    /// Performs the cascade deletes and hands back the still open transaction.
    async fn delete_atomic(&self, id: i32) -> Result<(DatabaseTransaction, CascadeDelete), AppError> {
        let txn = self.db.begin().await?;

        let summaries = PerformanceSummaryRepository::new(&txn)
            .delete_by_dictation(id)
            .await?;
        let attempts = AttemptRepository::new(&txn).delete_by_dictation(id).await?;
        let found = DictationRepository::new(&txn).delete(id).await?;

        Ok((
            txn,
            CascadeDelete {
                found,
                attempts,
                summaries,
            },
        ))
    }
}

/// Rows removed by a cascade delete.
struct CascadeDelete {
    found: bool,
    attempts: u64,
    summaries: u64,
}
