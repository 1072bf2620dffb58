use super::*;

/// Tests a business owner holds ManageBusinesses.
///
/// Expected: Ok(Identity) with the business owner's id
#[tokio::test]
async fn grants_business_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();
    let (user, headers) = signed_in(db, &signer, Role::BusinessOwner).await?;

    let identity = AuthGuard::new(db, &signer, &headers)
        .require(&[Permission::ManageBusinesses])
        .await?;

    assert_eq!(identity.user_id, user.id);

    Ok(())
}

/// Tests event owners and members are denied ManageBusinesses.
///
/// Expected: Err(AuthError::AccessDenied) for both roles
#[tokio::test]
async fn denies_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let signer = signer();

    for role in [Role::EventOwner, Role::Member] {
        let (_, headers) = signed_in(db, &signer, role).await?;

        assert_denied(
            AuthGuard::new(db, &signer, &headers)
                .require(&[Permission::ManageBusinesses])
                .await,
        );
    }

    Ok(())
}
