use super::*;

/// Tests overwriting the score of an attempt.
///
/// Verifies that score columns change while typed text and sequence number stay.
///
/// Expected: Ok with new score persisted
#[tokio::test]
async fn updates_score_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _dictation, attempts) =
        factory::helpers::create_dictation_with_attempts(db, 1).await?;
    let attempt = &attempts[0];

    let repo = AttemptRepository::new(db);
    let updated = repo.update_score(attempt.id, half_score()).await?;

    assert_eq!(updated.score, half_score());
    assert_eq!(updated.typed_text, attempt.typed_text);
    assert_eq!(updated.attempt_no, attempt.attempt_no);

    let stored = entity::prelude::Attempt::find_by_id(attempt.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.accuracy, 50.0);
    assert_eq!(stored.spelling_errors, 1);

    Ok(())
}

/// Tests updating the score of an attempt that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttemptRepository::new(db);
    let result = repo.update_score(77, half_score()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
