use super::*;

/// Tests finding the summary for a pair.
///
/// Expected: Ok(Some) with the pair's summary
#[tokio::test]
async fn finds_summary_for_pair() -> Result<(), DbErr> {
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
    let summary = repo
        .find_by_user_and_dictation(user.id, dictation.id)
        .await?
        .unwrap();

    assert_eq!(summary.id, created.id);
    assert_eq!(summary.stats.average_accuracy, created.average_accuracy);

    Ok(())
}

/// Tests looking up a pair with no attempts yet.
///
/// A missing summary is not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_before_first_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = PerformanceSummaryRepository::new(db);
    let summary = repo
        .find_by_user_and_dictation(user.id, dictation.id)
        .await?;

    assert!(summary.is_none());

    Ok(())
}
