use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the username, email and name and assigns an ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "typist".to_string(),
            email: "typist@example.com".to_string(),
            name: "Typist".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "typist");
    assert_eq!(user.email, "typist@example.com");
    assert_eq!(user.name, "Typist");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Verifies that inserting a second user with an existing username is rejected by the
/// unique index.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: existing.username.clone(),
            email: "other@example.com".to_string(),
            name: "Other".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
