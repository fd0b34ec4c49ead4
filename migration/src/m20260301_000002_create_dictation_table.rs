use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dictation::Table)
                    .if_not_exists()
                    .col(pk_auto(Dictation::Id))
                    .col(integer(Dictation::UserId))
                    .col(string(Dictation::Title))
                    .col(string_len(Dictation::Kind, 8))
                    .col(text_null(Dictation::Content))
                    .col(string_null(Dictation::AudioUrl))
                    .col(string(Dictation::Language))
                    .col(
                        timestamp_with_time_zone(Dictation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dictation_user_id")
                            .from(Dictation::Table, Dictation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dictation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dictation {
    Table,
    Id,
    UserId,
    Title,
    Kind,
    Content,
    AudioUrl,
    Language,
    CreatedAt,
}
