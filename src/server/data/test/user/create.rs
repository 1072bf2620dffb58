use super::*;
use sea_orm::SqlErr;

/// Tests creating a business owner account.
///
/// Verifies that the user row stores the wire role string and that an owner profile
/// is written with the supplied company and phone.
///
/// Expected: Ok with user and owner profile persisted
#[tokio::test]
async fn creates_owner_with_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("alice@example.com", Role::BusinessOwner))
        .await?;

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, "business_owner");

    let profile = repo.get_owner_profile(user.id).await?.unwrap();
    assert_eq!(profile.company.as_deref(), Some("Acme"));
    assert_eq!(profile.phone.as_deref(), Some("555-0100"));

    Ok(())
}

/// Tests that members get no owner profile.
///
/// Expected: Ok with no owner profile row
#[tokio::test]
async fn creates_member_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("bob@example.com", Role::Member))
        .await?;

    assert_eq!(user.role, "member");
    assert!(repo.get_owner_profile(user.id).await?.is_none());

    Ok(())
}

/// Tests that a duplicate email is rejected as a unique constraint violation.
///
/// Expected: Err whose `sql_err()` is `UniqueConstraintViolation`, original row intact
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(create_param("alice@example.com", Role::EventOwner))
        .await?;

    let err = repo
        .create(create_param("alice@example.com", Role::Member))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let stored = repo.find_by_email("alice@example.com").await?.unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.role, "event_owner");

    Ok(())
}
