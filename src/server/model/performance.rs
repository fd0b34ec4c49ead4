//! Performance summary domain models.
//!
//! One summary exists per (user, dictation) pair. `SummaryStats` is the part the
//! aggregate updater computes; the surrounding `PerformanceSummary` adds identity and
//! the optimistic-concurrency version.

use chrono::{DateTime, Utc};

use crate::model::{attempt::PerformanceUpdateDto, performance::PerformanceSummaryDto};

/// Rolling statistics for a (user, dictation) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub total_attempts: i32,
    /// Highest accuracy seen; never decreases.
    pub best_accuracy: f64,
    pub average_accuracy: f64,
    /// Mean seconds spent per attempt.
    pub average_time: f64,
    pub last_attempt_at: DateTime<Utc>,
}

/// Stored performance summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    pub stats: SummaryStats,
    /// Incremented on every write. Updates only apply when the stored version matches.
    pub version: i32,
}

impl PerformanceSummary {
    /// Converts the summary to a DTO for API responses.
    pub fn into_dto(self) -> PerformanceSummaryDto {
        PerformanceSummaryDto {
            id: self.id,
            user_id: self.user_id,
            dictation_id: self.dictation_id,
            total_attempts: self.stats.total_attempts,
            best_accuracy: self.stats.best_accuracy,
            average_accuracy: self.stats.average_accuracy,
            average_time: self.stats.average_time,
            last_attempt_at: self.stats.last_attempt_at,
        }
    }

    /// Converts the summary to the compact form returned with a submitted attempt.
    pub fn into_update_dto(self) -> PerformanceUpdateDto {
        PerformanceUpdateDto {
            total_attempts: self.stats.total_attempts,
            best_accuracy: self.stats.best_accuracy,
            average_accuracy: self.stats.average_accuracy,
            average_time: self.stats.average_time,
        }
    }

    /// Converts an entity model to a summary domain model at the repository boundary.
    pub fn from_entity(entity: entity::performance_summary::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            dictation_id: entity.dictation_id,
            stats: SummaryStats {
                total_attempts: entity.total_attempts,
                best_accuracy: entity.best_accuracy,
                average_accuracy: entity.average_accuracy,
                average_time: entity.average_time,
                last_attempt_at: entity.last_attempt_at,
            },
            version: entity.version,
        }
    }
}
