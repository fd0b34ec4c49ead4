use super::*;

/// Tests that recent summaries are ordered by last attempt and limited.
///
/// Expected: Ok with the two most recently practiced summaries, newest first
#[tokio::test]
async fn returns_most_recent_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    let mut summary_ids = Vec::new();
    for hours_ago in [3, 1, 2] {
        let dictation = factory::dictation::create_dictation(db, user.id).await?;
        let summary = factory::performance_summary::PerformanceSummaryFactory::new(
            db,
            user.id,
            dictation.id,
        )
        .last_attempt_at(now - Duration::hours(hours_ago))
        .build()
        .await?;
        summary_ids.push(summary.id);
    }

    let repo = PerformanceSummaryRepository::new(db);
    let recent = repo.get_recent_by_user(user.id, 2).await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, summary_ids[1]);
    assert_eq!(recent[1].id, summary_ids[2]);

    Ok(())
}

/// Tests that summaries of other users are excluded.
///
/// Expected: Ok with the user's single summary
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::performance_summary::create_performance_summary(db, user.id, dictation.id).await?;
    factory::performance_summary::create_performance_summary(db, other.id, dictation.id).await?;

    let repo = PerformanceSummaryRepository::new(db);
    let recent = repo.get_recent_by_user(user.id, 10).await?;
    let all = repo.get_by_user(user.id).await?;

    assert_eq!(recent.len(), 1);
    assert_eq!(all.len(), 1);
    assert_eq!(recent[0].user_id, user.id);

    Ok(())
}
