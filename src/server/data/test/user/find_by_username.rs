use super::*;

/// Tests finding a user by username.
///
/// Verifies that only the user with the exact username is returned.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .username("dictation_fan")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("dictation_fan").await?;

    assert_eq!(user.map(|u| u.id), Some(target.id));

    Ok(())
}

/// Tests looking up a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
