use crate::server::{
    data::dictation::DictationRepository,
    model::dictation::{CreateDictationParams, DictationKind},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_by_user;
