use super::*;

/// Tests resolving a caller from the identity header.
///
/// Expected: Ok(User) matching the header
#[tokio::test]
async fn resolves_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let headers = identity(&user.id.to_string());

    let resolved = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, user.username);

    Ok(())
}

/// Tests a request without the identity header.
///
/// Expected: Err(MissingIdentity)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests a header that is not a number.
///
/// Expected: Err(InvalidIdentity)
#[tokio::test]
async fn fails_for_malformed_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = identity("not-a-number");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidIdentity(_)))
    ));

    Ok(())
}

/// Tests a header naming a user that does not exist.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = identity("4242");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests the owner permission for the owning user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let headers = identity(&owner.id.to_string());

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Owner(owner.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the owner permission for a different user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _dictation) = factory::helpers::create_dictation_with_owner(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let headers = identity(&intruder.id.to_string());

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Owner(owner.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == intruder.id
    ));

    Ok(())
}
