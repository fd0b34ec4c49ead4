use super::*;

/// Tests finding a dictation by ID.
///
/// Expected: Ok(Some) with matching dictation
#[tokio::test]
async fn finds_existing_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, created) = factory::helpers::create_dictation_with_owner(db).await?;

    let repo = DictationRepository::new(db);
    let dictation = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(dictation.title, created.title);
    assert_eq!(dictation.reference_text(), "hello world");

    Ok(())
}

/// Tests looking up a dictation ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DictationRepository::new(db);
    let dictation = repo.find_by_id(42).await?;

    assert!(dictation.is_none());

    Ok(())
}
