use super::*;

/// Tests creating the first attempt for a (user, dictation) pair.
///
/// Expected: Ok with attempt_no 1 and score columns stored
#[tokio::test]
async fn creates_first_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = AttemptRepository::new(db);
    let attempt = repo.create(params(user.id, dictation.id)).await?;

    assert_eq!(attempt.attempt_no, 1);
    assert_eq!(attempt.score, half_score());
    assert_eq!(attempt.typed_text, "hello");
    assert_eq!(attempt.time_spent, 4.0);

    Ok(())
}

/// Tests that sequence numbers increase per (user, dictation) pair.
///
/// Verifies that numbering for one user is independent of another user's attempts on
/// the same dictation.
///
/// Expected: Ok with numbers 1, 2 for the owner and 1 for the other user
#[tokio::test]
async fn numbers_attempts_per_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = AttemptRepository::new(db);
    let first = repo.create(params(user.id, dictation.id)).await?;
    let other_first = repo.create(params(other.id, dictation.id)).await?;
    let second = repo.create(params(user.id, dictation.id)).await?;

    assert_eq!(first.attempt_no, 1);
    assert_eq!(second.attempt_no, 2);
    assert_eq!(other_first.attempt_no, 1);

    Ok(())
}

/// Tests that the next number follows the highest stored number.
///
/// Expected: Ok with attempt_no 6 after an attempt numbered 5
#[tokio::test]
async fn continues_after_highest_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    factory::attempt::AttemptFactory::new(db, user.id, dictation.id)
        .attempt_no(5)
        .build()
        .await?;

    let repo = AttemptRepository::new(db);
    let attempt = repo.create(params(user.id, dictation.id)).await?;

    assert_eq!(attempt.attempt_no, 6);

    Ok(())
}
