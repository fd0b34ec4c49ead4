use super::*;

/// Tests a write against the current version.
///
/// Expected: Ok(Some) with new statistics and version bumped to 2
#[tokio::test]
async fn applies_when_version_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let created =
        factory::performance_summary::create_performance_summary(db, user.id, dictation.id)
            .await?;

    let repo = PerformanceSummaryRepository::new(db);
    let updated = repo
        .compare_and_swap(created.id, created.version, stats(2, 95.0))
        .await?
        .unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.stats.total_attempts, 2);
    assert_eq!(updated.stats.best_accuracy, 95.0);
    assert_eq!(updated.user_id, user.id);

    Ok(())
}

/// Tests a write against a stale version.
///
/// Simulates another writer committing between read and write.
///
/// Expected: Ok(None) with stored row unchanged
#[tokio::test]
async fn skips_when_version_is_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let created =
        factory::performance_summary::create_performance_summary(db, user.id, dictation.id)
            .await?;

    let repo = PerformanceSummaryRepository::new(db);
    repo.compare_and_swap(created.id, 1, stats(2, 70.0))
        .await?
        .unwrap();
    let stale = repo.compare_and_swap(created.id, 1, stats(2, 99.0)).await?;

    assert!(stale.is_none());
    let stored = entity::prelude::PerformanceSummary::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.version, 2);
    assert_eq!(stored.best_accuracy, 70.0);

    Ok(())
}
