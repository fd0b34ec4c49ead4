use super::*;

/// Tests deleting all attempts on a dictation.
///
/// Verifies that attempts on other dictations are kept.
///
/// Expected: Ok(3) with only the unrelated attempt remaining
#[tokio::test]
async fn deletes_only_target_dictation_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation, _attempts) =
        factory::helpers::create_dictation_with_attempts(db, 3).await?;
    let unrelated = factory::dictation::create_dictation(db, user.id).await?;
    factory::attempt::create_attempt(db, user.id, unrelated.id).await?;

    let repo = AttemptRepository::new(db);
    let deleted = repo.delete_by_dictation(dictation.id).await?;

    assert_eq!(deleted, 3);
    let remaining = entity::prelude::Attempt::find()
        .filter(entity::attempt::Column::DictationId.eq(dictation.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);
    assert_eq!(entity::prelude::Attempt::find().count(db).await?, 1);

    Ok(())
}
