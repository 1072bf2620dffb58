use super::*;

/// Tests finding a user by email, including their password digest.
///
/// Expected: Ok(Some) with matching id and digest
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(create_param("alice@example.com", Role::Member))
        .await?;

    let found = repo.find_by_email("alice@example.com").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$2b$04$placeholder");

    Ok(())
}

/// Tests that lookups are exact and unknown emails return None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("alice@example.com", Role::Member))
        .await?;

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
