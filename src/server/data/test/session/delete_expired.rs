use super::*;
use test_utils::factory::session::create_expired_session;

/// Tests that the sweep removes expired rows and keeps live ones.
///
/// Expected: Ok(2), live session still present
#[tokio::test]
async fn removes_only_expired_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    create_expired_session(db, user.id, Duration::hours(1)).await?;
    create_expired_session(db, user.id, Duration::minutes(1)).await?;
    let live = factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await?, 2);
    assert_eq!(repo.count_by_user(user.id).await?, 1);
    assert!(repo
        .find_live_by_token(&live.token, Utc::now())
        .await?
        .is_some());

    Ok(())
}

/// Tests sweeping an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn succeeds_with_nothing_to_remove() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await?, 0);

    Ok(())
}
