//! Attempt domain models and parameters.
//!
//! An attempt is one scored submission of typed text against a dictation. Attempts are
//! immutable once stored except for the score columns, which the recompute path rewrites.

use chrono::{DateTime, Utc};

use crate::{
    model::attempt::{AttemptDto, SubmitAttemptDto, SubmittedAttemptDto},
    server::{error::AppError, model::performance::PerformanceSummary},
};

/// Word-level result of comparing a submission against its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Word count of the reference text.
    pub total_words: i32,
    /// Positions where the submitted word equals the reference word.
    pub correct_words: i32,
    /// Percentage in `0.0..=100.0`; `0.0` when the reference is empty.
    pub accuracy: f64,
    pub grammatical_errors: i32,
    pub spelling_errors: i32,
    pub case_errors: i32,
}

/// Attempt with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    pub typed_text: String,
    /// Sequence number within the (user, dictation) pair, starting at 1.
    pub attempt_no: i32,
    pub score: Score,
    pub comparison_data: Option<serde_json::Value>,
    /// Seconds spent on the attempt.
    pub time_spent: f64,
    pub created_at: DateTime<Utc>,
}

impl Attempt {
    /// Converts the attempt domain model to a DTO for API responses.
    pub fn into_dto(self) -> AttemptDto {
        AttemptDto {
            id: self.id,
            user_id: self.user_id,
            dictation_id: self.dictation_id,
            typed_text: self.typed_text,
            attempt_no: self.attempt_no,
            total_words: self.score.total_words,
            correct_words: self.score.correct_words,
            grammatical_errors: self.score.grammatical_errors,
            spelling_errors: self.score.spelling_errors,
            case_errors: self.score.case_errors,
            accuracy: self.score.accuracy,
            comparison_data: self.comparison_data,
            time_spent: self.time_spent,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an attempt domain model at the repository boundary.
    pub fn from_entity(entity: entity::attempt::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            dictation_id: entity.dictation_id,
            typed_text: entity.typed_text,
            attempt_no: entity.attempt_no,
            score: Score {
                total_words: entity.total_words,
                correct_words: entity.correct_words,
                accuracy: entity.accuracy,
                grammatical_errors: entity.grammatical_errors,
                spelling_errors: entity.spelling_errors,
                case_errors: entity.case_errors,
            },
            comparison_data: entity.comparison_data,
            time_spent: entity.time_spent,
            created_at: entity.created_at,
        }
    }
}

/// Submission as received from the caller, before scoring.
#[derive(Debug, Clone)]
pub struct SubmitAttemptParams {
    pub user_id: i32,
    pub dictation_id: i32,
    pub typed_text: String,
    pub time_spent: f64,
    pub comparison_data: Option<serde_json::Value>,
}

impl SubmitAttemptParams {
    /// Builds submission parameters for `user_id` from the request body.
    ///
    /// # Returns
    /// - `Ok(SubmitAttemptParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - `time_spent` is negative, NaN or infinite
    pub fn from_dto(user_id: i32, dto: SubmitAttemptDto) -> Result<Self, AppError> {
        if !dto.time_spent.is_finite() || dto.time_spent < 0.0 {
            return Err(AppError::BadRequest(
                "time_spent must be a non-negative number of seconds".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            dictation_id: dto.dictation_id,
            typed_text: dto.typed_text,
            time_spent: dto.time_spent,
            comparison_data: dto.comparison_data,
        })
    }
}

/// Scored attempt ready to be inserted. The repository assigns `attempt_no`.
#[derive(Debug, Clone)]
pub struct CreateAttemptParams {
    pub user_id: i32,
    pub dictation_id: i32,
    pub typed_text: String,
    pub score: Score,
    pub comparison_data: Option<serde_json::Value>,
    pub time_spent: f64,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a committed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedAttempt {
    pub attempt: Attempt,
    pub summary: PerformanceSummary,
}

impl SubmittedAttempt {
    pub fn into_dto(self) -> SubmittedAttemptDto {
        SubmittedAttemptDto {
            attempt: self.attempt.into_dto(),
            performance_update: self.summary.into_update_dto(),
        }
    }
}
