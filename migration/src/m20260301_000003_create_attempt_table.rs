use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000002_create_dictation_table::Dictation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attempt::Table)
                    .if_not_exists()
                    .col(pk_auto(Attempt::Id))
                    .col(integer(Attempt::UserId))
                    .col(integer(Attempt::DictationId))
                    .col(text(Attempt::TypedText))
                    .col(integer(Attempt::AttemptNo))
                    .col(integer(Attempt::TotalWords).default(0))
                    .col(integer(Attempt::CorrectWords).default(0))
                    .col(integer(Attempt::GrammaticalErrors).default(0))
                    .col(integer(Attempt::SpellingErrors).default(0))
                    .col(integer(Attempt::CaseErrors).default(0))
                    .col(double(Attempt::Accuracy).default(0.0))
                    .col(json_null(Attempt::ComparisonData))
                    .col(double(Attempt::TimeSpent).default(0.0))
                    .col(
                        timestamp_with_time_zone(Attempt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // Dependents are removed explicitly by the dictation delete transaction.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempt_user_id")
                            .from(Attempt::Table, Attempt::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attempt_dictation_id")
                            .from(Attempt::Table, Attempt::DictationId)
                            .to(Dictation::Table, Dictation::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attempt_user_dictation_attempt_no")
                    .table(Attempt::Table)
                    .col(Attempt::UserId)
                    .col(Attempt::DictationId)
                    .col(Attempt::AttemptNo)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attempt {
    Table,
    Id,
    UserId,
    DictationId,
    TypedText,
    AttemptNo,
    TotalWords,
    CorrectWords,
    GrammaticalErrors,
    SpellingErrors,
    CaseErrors,
    Accuracy,
    ComparisonData,
    TimeSpent,
    CreatedAt,
}
