use super::*;

/// Tests both owner roles hold ManageEvents.
///
/// Expected: Ok(Identity) for business and event owners
#[tokio::test]
async fn grants_owner_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();

    for role in [Role::BusinessOwner, Role::EventOwner] {
        let (user, headers) = signed_in(db, &signer, role).await?;

        let identity = AuthGuard::new(db, &signer, &headers)
            .require(&[Permission::ManageEvents])
            .await?;

        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.role, role);
    }

    Ok(())
}

/// Tests members are denied ManageEvents.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let (_, headers) = signed_in(db, &signer, Role::Member).await?;

    assert_denied(
        AuthGuard::new(db, &signer, &headers)
            .require(&[Permission::ManageEvents])
            .await,
    );

    Ok(())
}
