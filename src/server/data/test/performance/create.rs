use super::*;

/// Tests creating the first summary for a pair.
///
/// Expected: Ok with version 1 and the given statistics
#[tokio::test]
async fn creates_summary_with_initial_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = PerformanceSummaryRepository::new(db);
    let summary = repo.create(user.id, dictation.id, stats(1, 80.0)).await?;

    assert_eq!(summary.version, 1);
    assert_eq!(summary.stats.total_attempts, 1);
    assert_eq!(summary.stats.best_accuracy, 80.0);

    Ok(())
}

/// Tests that a second summary for the same pair is rejected.
///
/// The attempt service relies on this error being reported as a unique constraint
/// violation to switch to the update path.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_second_summary_for_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = PerformanceSummaryRepository::new(db);
    repo.create(user.id, dictation.id, stats(1, 80.0)).await?;
    let err = repo
        .create(user.id, dictation.id, stats(1, 90.0))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::PerformanceSummary::find().count(db).await?, 1);

    Ok(())
}
