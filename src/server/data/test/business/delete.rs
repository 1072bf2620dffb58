use super::*;

/// Tests deleting an owned business.
///
/// Expected: Ok(1) and the business no longer exists
#[tokio::test]
async fn deletes_owned_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let business = factory::create_business(db, owner.id).await?;

    let repo = BusinessRepository::new(db);

    assert_eq!(repo.delete(business.id, owner.id).await?, 1);
    assert!(!repo.exists(business.id).await?);

    Ok(())
}

/// Tests that a non-owner's delete leaves the business in place.
///
/// Expected: Ok(0) and the business still exists
#[tokio::test]
async fn does_not_delete_for_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let business = factory::create_business(db, owner.id).await?;

    let repo = BusinessRepository::new(db);

    assert_eq!(repo.delete(business.id, intruder.id).await?, 0);
    assert!(repo.exists(business.id).await?);

    Ok(())
}

/// Tests that deleting a business unlinks its events instead of deleting them.
///
/// Expected: Ok(1), event kept with `business_id` cleared
#[tokio::test]
async fn unlinks_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let business = factory::create_business(db, owner.id).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .business_id(business.id)
        .build()
        .await?;

    let repo = BusinessRepository::new(db);
    repo.delete(business.id, owner.id).await?;

    let events = crate::server::data::event::EventRepository::new(db);
    let remaining = events.get_by_id(event.id).await?.unwrap();
    assert_eq!(remaining.business_id, None);

    Ok(())
}
