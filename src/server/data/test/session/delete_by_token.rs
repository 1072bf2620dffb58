use super::*;

/// Tests that deleting by token removes exactly that session.
///
/// Expected: Ok(1), other session for the same user untouched
#[tokio::test]
async fn removes_only_matching_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let first = factory::create_session(db, user.id).await?;
    let second = factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);

    assert_eq!(repo.delete_by_token(&first.token).await?, 1);
    assert!(repo
        .find_live_by_token(&first.token, Utc::now())
        .await?
        .is_none());
    assert!(repo
        .find_live_by_token(&second.token, Utc::now())
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting an unknown token is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let session = factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);

    assert_eq!(repo.delete_by_token(&session.token).await?, 1);
    assert_eq!(repo.delete_by_token(&session.token).await?, 0);

    Ok(())
}
