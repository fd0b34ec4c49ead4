use super::*;

/// Tests listing a user's attempts across dictations.
///
/// Expected: Ok with the user's attempts only
#[tokio::test]
async fn returns_attempts_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first) = factory::helpers::create_dictation_with_owner(db).await?;
    let second = factory::dictation::create_dictation(db, user.id).await?;
    let other = factory::user::create_user(db).await?;
    factory::attempt::create_attempt(db, user.id, first.id).await?;
    factory::attempt::create_attempt(db, user.id, second.id).await?;
    factory::attempt::create_attempt(db, other.id, first.id).await?;

    let repo = AttemptRepository::new(db);
    let attempts = repo.get_by_user(user.id).await?;

    assert_eq!(attempts.len(), 2);
    assert!(attempts.iter().all(|a| a.user_id == user.id));

    Ok(())
}
