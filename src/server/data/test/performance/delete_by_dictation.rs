use super::*;

/// Tests deleting every summary that references a dictation.
///
/// Expected: Ok(2) with the unrelated summary kept
#[tokio::test]
async fn deletes_summaries_for_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let unrelated = factory::dictation::create_dictation(db, user.id).await?;
    factory::performance_summary::create_performance_summary(db, user.id, dictation.id).await?;
    factory::performance_summary::create_performance_summary(db, other.id, dictation.id).await?;
    factory::performance_summary::create_performance_summary(db, user.id, unrelated.id).await?;

    let repo = PerformanceSummaryRepository::new(db);
    let deleted = repo.delete_by_dictation(dictation.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::PerformanceSummary::find().count(db).await?, 1);

    Ok(())
}
