use super::*;

/// Tests deleting a dictation without dependents.
///
/// Expected: Ok(true) with dictation removed
#[tokio::test]
async fn deletes_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, dictation) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = DictationRepository::new(db);
    let deleted = repo.delete(dictation.id).await?;

    assert!(deleted);
    let check = entity::prelude::Dictation::find_by_id(dictation.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a dictation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DictationRepository::new(db);
    let deleted = repo.delete(12345).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that a dictation with attempts cannot be deleted on its own.
///
/// The foreign keys restrict deletes, so dependents must be removed first.
///
/// Expected: Err with dictation still present
#[tokio::test]
async fn fails_while_attempts_reference_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, dictation, _attempts) =
        factory::helpers::create_dictation_with_attempts(db, 1).await?;

    let repo = DictationRepository::new(db);
    let result = repo.delete(dictation.id).await;

    assert!(result.is_err());
    let check = entity::prelude::Dictation::find_by_id(dictation.id)
        .one(db)
        .await?;
    assert!(check.is_some());

    Ok(())
}
