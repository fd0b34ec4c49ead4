use super::*;

/// Tests creating a text dictation.
///
/// Expected: Ok with dictation stored as kind `text`
#[tokio::test]
async fn creates_text_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = DictationRepository::new(db);
    let dictation = repo
        .create(CreateDictationParams {
            user_id: user.id,
            title: "Pangram".to_string(),
            kind: DictationKind::Text,
            content: Some("the quick brown fox".to_string()),
            audio_url: None,
            language: "en".to_string(),
        })
        .await?;

    assert_eq!(dictation.user_id, user.id);
    assert_eq!(dictation.kind, DictationKind::Text);
    assert_eq!(dictation.reference_text(), "the quick brown fox");

    let stored = entity::prelude::Dictation::find_by_id(dictation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.kind, "text");

    Ok(())
}

/// Tests creating an audio dictation.
///
/// Expected: Ok with audio URL and no text content
#[tokio::test]
async fn creates_audio_dictation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = DictationRepository::new(db);
    let dictation = repo
        .create(CreateDictationParams {
            user_id: user.id,
            title: "Clip".to_string(),
            kind: DictationKind::Audio,
            content: None,
            audio_url: Some("https://cdn.example.com/clip.mp3".to_string()),
            language: "en".to_string(),
        })
        .await?;

    assert_eq!(dictation.kind, DictationKind::Audio);
    assert!(dictation.content.is_none());
    assert_eq!(
        dictation.audio_url.as_deref(),
        Some("https://cdn.example.com/clip.mp3")
    );

    Ok(())
}

/// Tests creating a dictation for a user that does not exist.
///
/// Verifies that the foreign key to the user table is enforced.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DictationRepository::new(db);
    let result = repo
        .create(CreateDictationParams {
            user_id: 999,
            title: "Orphan".to_string(),
            kind: DictationKind::Text,
            content: Some("hello".to_string()),
            audio_url: None,
            language: "en".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
