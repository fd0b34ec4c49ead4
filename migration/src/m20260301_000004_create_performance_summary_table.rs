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
                    .table(PerformanceSummary::Table)
                    .if_not_exists()
                    .col(pk_auto(PerformanceSummary::Id))
                    .col(integer(PerformanceSummary::UserId))
                    .col(integer(PerformanceSummary::DictationId))
                    .col(integer(PerformanceSummary::TotalAttempts).default(0))
                    .col(double(PerformanceSummary::BestAccuracy).default(0.0))
                    .col(double(PerformanceSummary::AverageAccuracy).default(0.0))
                    .col(double(PerformanceSummary::AverageTime).default(0.0))
                    .col(timestamp_with_time_zone(PerformanceSummary::LastAttemptAt))
                    .col(integer(PerformanceSummary::Version).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_summary_user_id")
                            .from(PerformanceSummary::Table, PerformanceSummary::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_summary_dictation_id")
                            .from(PerformanceSummary::Table, PerformanceSummary::DictationId)
                            .to(Dictation::Table, Dictation::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rolling summary per (user, dictation) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_performance_summary_user_dictation")
                    .table(PerformanceSummary::Table)
                    .col(PerformanceSummary::UserId)
                    .col(PerformanceSummary::DictationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerformanceSummary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PerformanceSummary {
    Table,
    Id,
    UserId,
    DictationId,
    TotalAttempts,
    BestAccuracy,
    AverageAccuracy,
    AverageTime,
    LastAttemptAt,
    Version,
}
