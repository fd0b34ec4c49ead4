//! Dictation data repository for database operations.

use crate::server::model::dictation::{CreateDictationParams, Dictation, DictationKind};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct DictationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DictationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new dictation
    pub async fn create(&self, params: CreateDictationParams) -> Result<Dictation, DbErr> {
        let entity = entity::dictation::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            content: ActiveValue::Set(params.content),
            audio_url: ActiveValue::Set(params.audio_url),
            language: ActiveValue::Set(params.language),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Dictation::from_entity(entity)
    }

    /// Gets a dictation by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dictation>, DbErr> {
        let entity = entity::prelude::Dictation::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Dictation::from_entity).transpose()
    }

    /// Gets a user's dictations, newest first, optionally restricted to one kind
    pub async fn get_by_user(
        &self,
        user_id: i32,
        kind: Option<DictationKind>,
    ) -> Result<Vec<Dictation>, DbErr> {
        let mut query = entity::prelude::Dictation::find()
            .filter(entity::dictation::Column::UserId.eq(user_id));

        if let Some(kind) = kind {
            query = query.filter(entity::dictation::Column::Kind.eq(kind.as_str()));
        }

        let entities = query
            .order_by_desc(entity::dictation::Column::CreatedAt)
            .order_by_desc(entity::dictation::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Dictation::from_entity).collect()
    }

    /// Deletes a dictation row.
    ///
    /// Dependent attempts and summaries must already be gone; the foreign keys do not cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The dictation existed and was deleted
    /// - `Ok(false)` - No dictation with that ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dictation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
