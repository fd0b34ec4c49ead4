//! Attempt submission and scoring.
//!
//! `AttemptService::submit` stores an attempt and folds it into the (user, dictation)
//! performance summary in one transaction. Concurrent submissions for the same pair are
//! reconciled with optimistic concurrency:
//!
//! - the first summary for a pair is inserted inside a savepoint; a unique constraint
//!   violation means another request created it first, so the savepoint is rolled back and
//!   the existing row is updated instead
//! - updates are compare-and-swap on the summary `version`; a lost race re-reads the row and
//!   recomputes, up to `MAX_SUMMARY_WRITE_ATTEMPTS` times
//!
//! Storage errors are never retried. They abort the transaction and reach the caller as is.

pub mod aggregate;
pub mod scoring;

use std::time::Duration;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, SqlErr, TransactionTrait};

use crate::server::{
    config::DEFAULT_TRANSACTION_TIMEOUT_SECS,
    data::{
        attempt::AttemptRepository, dictation::DictationRepository,
        performance::PerformanceSummaryRepository,
    },
    error::AppError,
    model::{
        attempt::{Attempt, CreateAttemptParams, SubmitAttemptParams, SubmittedAttempt},
        performance::PerformanceSummary,
    },
    service::attempt::scoring::{PositionalScorer, Scorer},
    util::transaction::with_deadline,
};

/// Number of times a summary write is attempted before the submission is abandoned.
pub const MAX_SUMMARY_WRITE_ATTEMPTS: u32 = 3;

pub struct AttemptService<'a, S: Scorer = PositionalScorer> {
    db: &'a DatabaseConnection,
    scorer: S,
    timeout: Duration,
}

impl<'a> AttemptService<'a> {
    /// Creates a service using positional scoring and the default transaction deadline.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            scorer: PositionalScorer,
            timeout: Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECS),
        }
    }
}

impl<'a, S: Scorer> AttemptService<'a, S> {
    /// Sets the deadline for each transaction the service opens.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the scorer used for submissions and recomputes.
    pub fn with_scorer<T: Scorer>(self, scorer: T) -> AttemptService<'a, T> {
        AttemptService {
            db: self.db,
            scorer,
            timeout: self.timeout,
        }
    }

    /// Scores and stores an attempt, updating the pair's performance summary.
    ///
    /// The dictation is read and the text scored before the transaction opens. The attempt
    /// insert and the summary write then commit together or not at all. The deadline bounds
    /// the writes only; the commit runs after it, so an aborted submission has stored nothing.
    ///
    /// # Arguments
    /// - `params` - Validated submission
    ///
    /// # Returns
    /// - `Ok(SubmittedAttempt)` - Stored attempt and the summary after it
    /// - `Err(AppError::NotFound)` - Dictation does not exist
    /// - `Err(AppError::TransactionAborted)` - Deadline exceeded or summary writes kept
    ///   conflicting; nothing was stored
    /// - `Err(AppError::DbErr)` - Storage failure; nothing was stored
    pub async fn submit(&self, params: SubmitAttemptParams) -> Result<SubmittedAttempt, AppError> {
        let dictation = DictationRepository::new(self.db)
            .find_by_id(params.dictation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Dictation {} not found", params.dictation_id))
            })?;

        let score = self
            .scorer
            .score(dictation.reference_text(), &params.typed_text);

        let create = CreateAttemptParams {
            user_id: params.user_id,
            dictation_id: params.dictation_id,
            typed_text: params.typed_text,
            score,
            comparison_data: params.comparison_data,
            time_spent: params.time_spent,
            created_at: Utc::now(),
        };

        let (txn, submitted) = with_deadline(self.timeout, self.submit_atomic(create)).await?;
        txn.commit().await?;

        tracing::info!(
            attempt_id = submitted.attempt.id,
            user_id = submitted.attempt.user_id,
            dictation_id = submitted.attempt.dictation_id,
            attempt_no = submitted.attempt.attempt_no,
            accuracy = submitted.attempt.score.accuracy,
            "Recorded attempt"
        );

        Ok(submitted)
    }

    /// Performs the submission writes and hands back the still open transaction.
    async fn submit_atomic(
        &self,
        params: CreateAttemptParams,
    ) -> Result<(DatabaseTransaction, SubmittedAttempt), AppError> {
        let txn = self.db.begin().await?;

        let attempt = AttemptRepository::new(&txn).create(params).await?;
        let summary = record_in_summary(&txn, &attempt).await?;

        Ok((txn, SubmittedAttempt { attempt, summary }))
    }

    /// Gets an attempt by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Attempt>, AppError> {
        Ok(AttemptRepository::new(self.db).find_by_id(id).await?)
    }

    /// Lists every attempt on a dictation, newest first.
    pub async fn get_by_dictation(&self, dictation_id: i32) -> Result<Vec<Attempt>, AppError> {
        Ok(AttemptRepository::new(self.db)
            .get_by_dictation(dictation_id)
            .await?)
    }

    /// Lists every attempt by a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Attempt>, AppError> {
        Ok(AttemptRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Rescores an attempt against the dictation's current text.
    ///
    /// Only the attempt's score columns change. The performance summary keeps the accuracy
    /// recorded at submission time.
    ///
    /// # Returns
    /// - `Ok(Attempt)` - Attempt with the new score
    /// - `Err(AppError::NotFound)` - The dictation no longer exists
    pub async fn recompute(&self, attempt: Attempt) -> Result<Attempt, AppError> {
        let dictation = DictationRepository::new(self.db)
            .find_by_id(attempt.dictation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Dictation {} not found", attempt.dictation_id))
            })?;

        let score = self
            .scorer
            .score(dictation.reference_text(), &attempt.typed_text);

        let updated = AttemptRepository::new(self.db)
            .update_score(attempt.id, score)
            .await?;

        tracing::info!(
            attempt_id = updated.id,
            previous_accuracy = attempt.score.accuracy,
            accuracy = updated.score.accuracy,
            "Recomputed attempt accuracy"
        );

        Ok(updated)
    }
}

/// Folds a freshly inserted attempt into its pair's summary within `txn`.
async fn record_in_summary(
    txn: &DatabaseTransaction,
    attempt: &Attempt,
) -> Result<PerformanceSummary, AppError> {
    let current = PerformanceSummaryRepository::new(txn)
        .find_by_user_and_dictation(attempt.user_id, attempt.dictation_id)
        .await?;

    write_summary(txn, attempt, current).await
}

/// Writes the summary starting from `current`, the row as last read.
///
/// `current` may already be stale: a `None` that lost an insert race switches to the update
/// path, and a version that moved on is re-read before retrying.
async fn write_summary(
    txn: &DatabaseTransaction,
    attempt: &Attempt,
    mut current: Option<PerformanceSummary>,
) -> Result<PerformanceSummary, AppError> {
    let repo = PerformanceSummaryRepository::new(txn);

    for write in 1..=MAX_SUMMARY_WRITE_ATTEMPTS {
        match current {
            None => {
                let stats = aggregate::update(
                    None,
                    attempt.score.accuracy,
                    attempt.time_spent,
                    attempt.created_at,
                );

                let savepoint = txn.begin().await?;
                match PerformanceSummaryRepository::new(&savepoint)
                    .create(attempt.user_id, attempt.dictation_id, stats)
                    .await
                {
                    Ok(summary) => {
                        savepoint.commit().await?;
                        return Ok(summary);
                    }
                    Err(err)
                        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                    {
                        savepoint.rollback().await?;
                        tracing::debug!(
                            user_id = attempt.user_id,
                            dictation_id = attempt.dictation_id,
                            write,
                            "Summary created concurrently, switching to update"
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Some(existing) => {
                let stats = aggregate::update(
                    Some(&existing.stats),
                    attempt.score.accuracy,
                    attempt.time_spent,
                    attempt.created_at,
                );

                if let Some(summary) = repo
                    .compare_and_swap(existing.id, existing.version, stats)
                    .await?
                {
                    return Ok(summary);
                }

                tracing::debug!(
                    summary_id = existing.id,
                    version = existing.version,
                    write,
                    "Summary version changed, retrying"
                );
            }
        }

        current = repo
            .find_by_user_and_dictation(attempt.user_id, attempt.dictation_id)
            .await?;
    }

    Err(AppError::TransactionAborted(format!(
        "summary for user {} and dictation {} changed on each of {} writes",
        attempt.user_id, attempt.dictation_id, MAX_SUMMARY_WRITE_ATTEMPTS
    )))
}
