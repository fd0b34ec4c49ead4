use crate::server::{
    data::attempt::AttemptRepository,
    model::attempt::{CreateAttemptParams, Score},
};
use chrono::Utc;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_dictation;
mod get_by_dictation;
mod get_by_user;
mod update_score;

fn half_score() -> Score {
    Score {
        total_words: 2,
        correct_words: 1,
        accuracy: 50.0,
        grammatical_errors: 0,
        spelling_errors: 1,
        case_errors: 0,
    }
}

fn params(user_id: i32, dictation_id: i32) -> CreateAttemptParams {
    CreateAttemptParams {
        user_id,
        dictation_id,
        typed_text: "hello".to_string(),
        score: half_score(),
        comparison_data: None,
        time_spent: 4.0,
        created_at: Utc::now(),
    }
}
