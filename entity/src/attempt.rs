use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attempt")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    #[sea_orm(column_type = "Text")]
    pub typed_text: String,
    /// Sequence number within the (user, dictation) pair, starting at 1.
    pub attempt_no: i32,
    pub total_words: i32,
    pub correct_words: i32,
    pub grammatical_errors: i32,
    pub spelling_errors: i32,
    pub case_errors: i32,
    #[sea_orm(column_type = "Double")]
    pub accuracy: f64,
    pub comparison_data: Option<Json>,
    /// Seconds spent on the attempt.
    #[sea_orm(column_type = "Double")]
    pub time_spent: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::dictation::Entity",
        from = "Column::DictationId",
        to = "super::dictation::Column::Id"
    )]
    Dictation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::dictation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dictation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
