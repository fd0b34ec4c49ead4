pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_dictation_table;
mod m20260301_000003_create_attempt_table;
mod m20260301_000004_create_performance_summary_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_dictation_table::Migration),
            Box::new(m20260301_000003_create_attempt_table::Migration),
            Box::new(m20260301_000004_create_performance_summary_table::Migration),
        ]
    }
}
