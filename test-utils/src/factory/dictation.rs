//! Dictation factory for creating test dictation entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dictations with customizable fields.
///
/// Defaults to a text dictation whose content is `"hello world"`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dictation::DictationFactory;
///
/// let dictation = DictationFactory::new(&db, user.id)
///     .audio("https://cdn.example.com/clip.mp3")
///     .build()
///     .await?;
/// ```
pub struct DictationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    kind: String,
    content: Option<String>,
    audio_url: Option<String>,
    language: String,
}

impl<'a> DictationFactory<'a> {
    /// Creates a new DictationFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Dictation {id}"`
    /// - kind: `"text"`
    /// - content: `Some("hello world")`
    /// - audio_url: `None`
    /// - language: `"en"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user's ID
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Dictation {}", id),
            kind: "text".to_string(),
            content: Some("hello world".to_string()),
            audio_url: None,
            language: "en".to_string(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the reference text, keeping the dictation a text dictation.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Turns the dictation into an audio dictation without text content.
    pub fn audio(mut self, audio_url: impl Into<String>) -> Self {
        self.kind = "audio".to_string();
        self.content = None;
        self.audio_url = Some(audio_url.into());
        self
    }

    /// Sets the language tag.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builds and inserts the dictation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dictation::Model)` - Created dictation entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown user)
    pub async fn build(self) -> Result<entity::dictation::Model, DbErr> {
        entity::dictation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            audio_url: ActiveValue::Set(self.audio_url),
            language: ActiveValue::Set(self.language),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text dictation with default values for the given owner.
pub async fn create_dictation(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::dictation::Model, DbErr> {
    DictationFactory::new(db, user_id).build().await
}
