use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttemptDto {
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    pub typed_text: String,
    pub attempt_no: i32,
    pub total_words: i32,
    pub correct_words: i32,
    pub grammatical_errors: i32,
    pub spelling_errors: i32,
    pub case_errors: i32,
    pub accuracy: f64,
    #[schema(value_type = Option<Object>)]
    pub comparison_data: Option<serde_json::Value>,
    pub time_spent: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitAttemptDto {
    pub dictation_id: i32,
    pub typed_text: String,
    /// Seconds spent typing.
    pub time_spent: f64,
    #[schema(value_type = Option<Object>)]
    pub comparison_data: Option<serde_json::Value>,
}

/// Aggregate state for the (user, dictation) pair after a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceUpdateDto {
    pub total_attempts: i32,
    pub best_accuracy: f64,
    pub average_accuracy: f64,
    pub average_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmittedAttemptDto {
    pub attempt: AttemptDto,
    pub performance_update: PerformanceUpdateDto,
}
