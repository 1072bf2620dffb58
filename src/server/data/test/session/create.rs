use super::*;

/// Tests that a user can hold several independent sessions.
///
/// Expected: Ok with two rows for the same user
#[tokio::test]
async fn stores_multiple_sessions_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = SessionRepository::new(db);
    let now = Utc::now();
    let first = repo
        .create(user.id, "token-a".to_string(), now, now + Duration::hours(24))
        .await?;
    let second = repo
        .create(user.id, "token-b".to_string(), now, now + Duration::hours(24))
        .await?;

    assert_ne!(first.id, second.id);
    assert!(first.expires_at > first.created_at);
    assert_eq!(repo.count_by_user(user.id).await?, 2);

    Ok(())
}

/// Tests that the same token cannot be stored twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = SessionRepository::new(db);
    let now = Utc::now();
    repo.create(user.id, "token-a".to_string(), now, now + Duration::hours(1))
        .await?;

    let result = repo
        .create(user.id, "token-a".to_string(), now, now + Duration::hours(1))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a session cannot reference a nonexistent user.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let now = Utc::now();
    let result = repo
        .create(4242, "token-a".to_string(), now, now + Duration::hours(1))
        .await;

    assert!(result.is_err());

    Ok(())
}
