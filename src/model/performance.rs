use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceSummaryDto {
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    pub total_attempts: i32,
    pub best_accuracy: f64,
    pub average_accuracy: f64,
    pub average_time: f64,
    pub last_attempt_at: DateTime<Utc>,
}
