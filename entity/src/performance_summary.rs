use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "performance_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub dictation_id: i32,
    pub total_attempts: i32,
    #[sea_orm(column_type = "Double")]
    pub best_accuracy: f64,
    #[sea_orm(column_type = "Double")]
    pub average_accuracy: f64,
    #[sea_orm(column_type = "Double")]
    pub average_time: f64,
    pub last_attempt_at: DateTimeUtc,
    /// Bumped on every write; updates are conditional on the version read.
    pub version: i32,
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
