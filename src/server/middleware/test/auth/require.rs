use super::*;

mod require_manage_businesses;
mod require_manage_events;

/// Tests an empty permission list only needs a live session.
///
/// Expected: Ok(Identity) for a member
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let (user, headers) = signed_in(db, &signer, Role::Member).await?;

    let identity = AuthGuard::new(db, &signer, &headers).require(&[]).await?;

    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.role, Role::Member);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingBearerToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &signer, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests a revoked session is refused even though its signature is still valid.
///
/// Expected: Err(AuthError::InvalidSession)
#[tokio::test]
async fn rejects_revoked_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let (user, _) = signed_in(db, &signer, Role::BusinessOwner).await?;

    let token = SessionService::new(db, &signer).issue(&user).await?;
    SessionService::new(db, &signer).revoke(&token).await?;
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(db, &signer, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSession))
    ));

    Ok(())
}

/// Tests a garbage bearer value is treated as unauthenticated, not forbidden.
///
/// Expected: 401-class AuthError
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let headers = bearer_headers("not-a-token");

    assert_unauthenticated(
        AuthGuard::new(db, &signer, &headers)
            .require(&[Permission::ManageBusinesses])
            .await,
    );

    Ok(())
}

/// Tests every listed permission must be held.
///
/// Expected: Err(AuthError::AccessDenied) for an event owner asking for both permissions
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let (_, headers) = signed_in(db, &signer, Role::EventOwner).await?;

    assert_denied(
        AuthGuard::new(db, &signer, &headers)
            .require(&[Permission::ManageEvents, Permission::ManageBusinesses])
            .await,
    );

    Ok(())
}
