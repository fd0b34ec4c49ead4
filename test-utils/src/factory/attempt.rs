//! Attempt factory for inserting raw attempt rows.
//!
//! Rows are written directly, without scoring and without touching the performance
//! summary. Tests of the submission transaction go through the attempt service instead.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attempts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attempt::AttemptFactory;
///
/// let attempt = AttemptFactory::new(&db, user.id, dictation.id)
///     .attempt_no(2)
///     .accuracy(50.0)
///     .build()
///     .await?;
/// ```
pub struct AttemptFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    dictation_id: i32,
    typed_text: String,
    attempt_no: i32,
    total_words: i32,
    correct_words: i32,
    accuracy: f64,
    comparison_data: Option<serde_json::Value>,
    time_spent: f64,
}

impl<'a> AttemptFactory<'a> {
    /// Creates a new AttemptFactory with default values.
    ///
    /// Defaults describe a perfect attempt on `"hello world"`:
    /// - typed_text: `"hello world"`
    /// - attempt_no: `1`
    /// - total_words / correct_words: `2` / `2`
    /// - accuracy: `100.0`
    /// - comparison_data: `Some({})`
    /// - time_spent: `1.5`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, dictation_id: i32) -> Self {
        Self {
            db,
            user_id,
            dictation_id,
            typed_text: "hello world".to_string(),
            attempt_no: 1,
            total_words: 2,
            correct_words: 2,
            accuracy: 100.0,
            comparison_data: Some(serde_json::json!({})),
            time_spent: 1.5,
        }
    }

    /// Sets the typed text.
    pub fn typed_text(mut self, typed_text: impl Into<String>) -> Self {
        self.typed_text = typed_text.into();
        self
    }

    /// Sets the sequence number within the (user, dictation) pair.
    pub fn attempt_no(mut self, attempt_no: i32) -> Self {
        self.attempt_no = attempt_no;
        self
    }

    /// Sets the total and correct word counts.
    pub fn words(mut self, total_words: i32, correct_words: i32) -> Self {
        self.total_words = total_words;
        self.correct_words = correct_words;
        self
    }

    /// Sets the accuracy percentage.
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the time spent in seconds.
    pub fn time_spent(mut self, time_spent: f64) -> Self {
        self.time_spent = time_spent;
        self
    }

    /// Builds and inserts the attempt entity into the database.
    ///
    /// Every word that is not correct is recorded as a spelling error.
    ///
    /// # Returns
    /// - `Ok(entity::attempt::Model)` - Created attempt entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attempt::Model, DbErr> {
        entity::attempt::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            dictation_id: ActiveValue::Set(self.dictation_id),
            typed_text: ActiveValue::Set(self.typed_text),
            attempt_no: ActiveValue::Set(self.attempt_no),
            total_words: ActiveValue::Set(self.total_words),
            correct_words: ActiveValue::Set(self.correct_words),
            grammatical_errors: ActiveValue::Set(0),
            spelling_errors: ActiveValue::Set(self.total_words - self.correct_words),
            case_errors: ActiveValue::Set(0),
            accuracy: ActiveValue::Set(self.accuracy),
            comparison_data: ActiveValue::Set(self.comparison_data),
            time_spent: ActiveValue::Set(self.time_spent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default attempt numbered 1 for the given pair.
pub async fn create_attempt(
    db: &DatabaseConnection,
    user_id: i32,
    dictation_id: i32,
) -> Result<entity::attempt::Model, DbErr> {
    AttemptFactory::new(db, user_id, dictation_id).build().await
}
