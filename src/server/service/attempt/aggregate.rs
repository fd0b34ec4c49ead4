//! Rolling per-(user, dictation) statistics.

use chrono::{DateTime, Utc};

use crate::server::model::performance::SummaryStats;

/// Folds one attempt into the previous statistics.
///
/// With no previous statistics the attempt seeds them. Otherwise averages are updated with
/// the incremental mean `(avg * n + x) / (n + 1)` and the best accuracy keeps the maximum.
/// The mean is not compensated, so rounding error grows slowly with very large attempt counts.
///
/// # Arguments
/// - `existing` - Statistics before this attempt, if any
/// - `accuracy` - Accuracy of the new attempt
/// - `time_spent` - Seconds spent on the new attempt
/// - `at` - Timestamp of the new attempt
///
/// # Returns
/// - `SummaryStats` - Statistics including the new attempt
pub fn update(
    existing: Option<&SummaryStats>,
    accuracy: f64,
    time_spent: f64,
    at: DateTime<Utc>,
) -> SummaryStats {
    let Some(existing) = existing else {
        return SummaryStats {
            total_attempts: 1,
            best_accuracy: accuracy,
            average_accuracy: accuracy,
            average_time: time_spent,
            last_attempt_at: at,
        };
    };

    let previous = existing.total_attempts as f64;
    let total_attempts = existing.total_attempts + 1;
    let total = total_attempts as f64;

    SummaryStats {
        total_attempts,
        best_accuracy: existing.best_accuracy.max(accuracy),
        average_accuracy: (existing.average_accuracy * previous + accuracy) / total,
        average_time: (existing.average_time * previous + time_spent) / total,
        last_attempt_at: at,
    }
}
