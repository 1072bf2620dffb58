use super::*;
use test_utils::factory::session::{create_expired_session, SessionFactory};

/// Tests finding a live session by its exact token.
///
/// Expected: Ok(Some) with the owning user id
#[tokio::test]
async fn finds_live_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let session = factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);
    let found = repo
        .find_live_by_token(&session.token, Utc::now())
        .await?
        .unwrap();

    assert_eq!(found.user_id, user.id);
    assert_eq!(found.token, session.token);

    Ok(())
}

/// Tests that expired rows are treated as absent even before the sweep removes them.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let session = create_expired_session(db, user.id, Duration::seconds(1)).await?;

    let repo = SessionRepository::new(db);

    assert!(repo
        .find_live_by_token(&session.token, Utc::now())
        .await?
        .is_none());

    Ok(())
}

/// Tests that liveness is judged against the supplied instant.
///
/// Expected: Ok(Some) before expiry, Ok(None) after
#[tokio::test]
async fn judges_expiry_against_given_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let session = SessionFactory::new(db, user.id)
        .expires_in(Duration::minutes(10))
        .build()
        .await?;

    let repo = SessionRepository::new(db);

    assert!(repo
        .find_live_by_token(&session.token, Utc::now())
        .await?
        .is_some());
    assert!(repo
        .find_live_by_token(&session.token, Utc::now() + Duration::minutes(11))
        .await?
        .is_none());

    Ok(())
}

/// Tests that an unknown token is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);

    assert!(repo
        .find_live_by_token("never-issued", Utc::now())
        .await?
        .is_none());

    Ok(())
}
