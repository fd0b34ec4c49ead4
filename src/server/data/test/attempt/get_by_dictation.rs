use super::*;

/// Tests listing attempts on a dictation across users.
///
/// Expected: Ok with every attempt on the dictation and none from other dictations
#[tokio::test]
async fn returns_attempts_for_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation, _attempts) =
        factory::helpers::create_dictation_with_attempts(db, 2).await?;
    let other = factory::user::create_user(db).await?;
    factory::attempt::create_attempt(db, other.id, dictation.id).await?;
    let unrelated = factory::dictation::create_dictation(db, user.id).await?;
    factory::attempt::create_attempt(db, user.id, unrelated.id).await?;

    let repo = AttemptRepository::new(db);
    let attempts = repo.get_by_dictation(dictation.id).await?;

    assert_eq!(attempts.len(), 3);
    assert!(attempts.iter().all(|a| a.dictation_id == dictation.id));

    Ok(())
}

/// Tests listing attempts on a dictation with none recorded.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = AttemptRepository::new(db);
    let attempts = repo.get_by_dictation(dictation.id).await?;

    assert!(attempts.is_empty());

    Ok(())
}
