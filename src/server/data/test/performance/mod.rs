use crate::server::{
    data::performance::PerformanceSummaryRepository, model::performance::SummaryStats,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod compare_and_swap;
mod create;
mod delete_by_dictation;
mod find_by_user_and_dictation;
mod get_recent_by_user;

fn stats(total_attempts: i32, accuracy: f64) -> SummaryStats {
    SummaryStats {
        total_attempts,
        best_accuracy: accuracy,
        average_accuracy: accuracy,
        average_time: 10.0,
        last_attempt_at: Utc::now(),
    }
}
