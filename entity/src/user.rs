use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dictation::Entity")]
    Dictation,
    #[sea_orm(has_many = "super::attempt::Entity")]
    Attempt,
    #[sea_orm(has_many = "super::performance_summary::Entity")]
    PerformanceSummary,
}

impl Related<super::dictation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dictation.def()
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
