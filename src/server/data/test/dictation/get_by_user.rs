use super::*;

/// Tests listing a user's dictations.
///
/// Verifies that only the owner's dictations are returned and that other users'
/// dictations are excluded.
///
/// Expected: Ok with the owner's two dictations
#[tokio::test]
async fn returns_only_owned_dictations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::dictation::create_dictation(db, owner.id).await?;
    factory::dictation::create_dictation(db, owner.id).await?;
    factory::dictation::create_dictation(db, other.id).await?;

    let repo = DictationRepository::new(db);
    let dictations = repo.get_by_user(owner.id, None).await?;

    assert_eq!(dictations.len(), 2);
    assert!(dictations.iter().all(|d| d.user_id == owner.id));

    Ok(())
}

/// Tests filtering a user's dictations by kind.
///
/// Expected: Ok with only the audio dictation
#[tokio::test]
async fn filters_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::dictation::create_dictation(db, owner.id).await?;
    let audio = factory::dictation::DictationFactory::new(db, owner.id)
        .audio("https://cdn.example.com/a.mp3")
        .build()
        .await?;

    let repo = DictationRepository::new(db);
    let dictations = repo
        .get_by_user(owner.id, Some(DictationKind::Audio))
        .await?;

    assert_eq!(dictations.len(), 1);
    assert_eq!(dictations[0].id, audio.id);

    Ok(())
}
