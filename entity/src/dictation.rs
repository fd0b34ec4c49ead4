use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dictation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    /// Either `text` or `audio`.
    pub kind: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub audio_url: Option<String>,
    pub language: String,
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
    #[sea_orm(has_many = "super::attempt::Entity")]
    Attempt,
    #[sea_orm(has_many = "super::performance_summary::Entity")]
    PerformanceSummary,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl Related<super::performance_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PerformanceSummary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
