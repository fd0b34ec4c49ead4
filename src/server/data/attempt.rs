//! Attempt data repository for database operations.
//!
//! Attempts are append-only apart from `update_score`. Sequence numbers are assigned here
//! so that callers inside a transaction get a number consistent with the rows they can see.

use crate::server::model::attempt::{Attempt, CreateAttemptParams, Score};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AttemptRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttemptRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a scored attempt.
    ///
    /// Assigns `attempt_no` as one more than the highest number stored for the
    /// (user, dictation) pair. The unique index on (user, dictation, attempt_no) rejects a
    /// concurrent insert that computed the same number.
    ///
    /// # Arguments
    /// - `params` - Scored attempt including its creation timestamp
    ///
    /// # Returns
    /// - `Ok(Attempt)` - The created attempt
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(&self, params: CreateAttemptParams) -> Result<Attempt, DbErr> {
        let attempt_no = self
            .next_attempt_no(params.user_id, params.dictation_id)
            .await?;

        let entity = entity::attempt::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            dictation_id: ActiveValue::Set(params.dictation_id),
            typed_text: ActiveValue::Set(params.typed_text),
            attempt_no: ActiveValue::Set(attempt_no),
            total_words: ActiveValue::Set(params.score.total_words),
            correct_words: ActiveValue::Set(params.score.correct_words),
            grammatical_errors: ActiveValue::Set(params.score.grammatical_errors),
            spelling_errors: ActiveValue::Set(params.score.spelling_errors),
            case_errors: ActiveValue::Set(params.score.case_errors),
            accuracy: ActiveValue::Set(params.score.accuracy),
            comparison_data: ActiveValue::Set(params.comparison_data),
            time_spent: ActiveValue::Set(params.time_spent),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attempt::from_entity(entity))
    }

    /// Returns the sequence number the next attempt for the pair should receive.
    pub async fn next_attempt_no(&self, user_id: i32, dictation_id: i32) -> Result<i32, DbErr> {
        let latest = entity::prelude::Attempt::find()
            .filter(entity::attempt::Column::UserId.eq(user_id))
            .filter(entity::attempt::Column::DictationId.eq(dictation_id))
            .order_by_desc(entity::attempt::Column::AttemptNo)
            .one(self.db)
            .await?;

        Ok(latest.map(|attempt| attempt.attempt_no + 1).unwrap_or(1))
    }

    /// Gets an attempt by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attempt>, DbErr> {
        let entity = entity::prelude::Attempt::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Attempt::from_entity))
    }

    /// Gets every attempt on a dictation, newest first
    pub async fn get_by_dictation(&self, dictation_id: i32) -> Result<Vec<Attempt>, DbErr> {
        let entities = entity::prelude::Attempt::find()
            .filter(entity::attempt::Column::DictationId.eq(dictation_id))
            .order_by_desc(entity::attempt::Column::CreatedAt)
            .order_by_desc(entity::attempt::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Attempt::from_entity).collect())
    }

    /// Gets every attempt by a user, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Attempt>, DbErr> {
        let entities = entity::prelude::Attempt::find()
            .filter(entity::attempt::Column::UserId.eq(user_id))
            .order_by_desc(entity::attempt::Column::CreatedAt)
            .order_by_desc(entity::attempt::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Attempt::from_entity).collect())
    }

    /// Overwrites the score columns of an attempt.
    ///
    /// Typed text, timing and sequence number are left untouched.
    ///
    /// # Returns
    /// - `Ok(Attempt)` - The updated attempt
    /// - `Err(DbErr::RecordNotFound)` - No attempt with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_score(&self, id: i32, score: Score) -> Result<Attempt, DbErr> {
        let attempt = entity::prelude::Attempt::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Attempt with id {} not found",
                id
            )))?;

        let mut active_model: entity::attempt::ActiveModel = attempt.into();
        active_model.total_words = ActiveValue::Set(score.total_words);
        active_model.correct_words = ActiveValue::Set(score.correct_words);
        active_model.grammatical_errors = ActiveValue::Set(score.grammatical_errors);
        active_model.spelling_errors = ActiveValue::Set(score.spelling_errors);
        active_model.case_errors = ActiveValue::Set(score.case_errors);
        active_model.accuracy = ActiveValue::Set(score.accuracy);

        let entity = active_model.update(self.db).await?;

        Ok(Attempt::from_entity(entity))
    }

    /// Deletes every attempt on a dictation, returning how many rows were removed
    pub async fn delete_by_dictation(&self, dictation_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Attempt::delete_many()
            .filter(entity::attempt::Column::DictationId.eq(dictation_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
