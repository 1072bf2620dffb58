use super::*;

/// Tests deleting a booking on an owned event.
///
/// Expected: Ok(1) and the booking no longer exists
#[tokio::test]
async fn deletes_for_event_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let booking = factory::create_booking(db, event.id).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.delete(booking.id, owner.id).await?, 1);
    assert!(!repo.exists(booking.id).await?);

    Ok(())
}

/// Tests that a non-owner's delete is refused at the statement level.
///
/// Expected: Ok(0) and the booking still exists
#[tokio::test]
async fn does_not_delete_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let booking = factory::create_booking(db, event.id).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.delete(booking.id, intruder.id).await?, 0);
    assert!(repo.exists(booking.id).await?);

    Ok(())
}
