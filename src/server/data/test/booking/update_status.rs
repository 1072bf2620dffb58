use super::*;

/// Tests that the event owner can confirm a booking.
///
/// Expected: Ok(1) with status "confirmed"
#[tokio::test]
async fn updates_status_for_event_owner() -> Result<(), DbErr> {
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
    let updated = repo
        .update_status(booking.id, owner.id, BookingStatus::Confirmed)
        .await?;

    assert_eq!(updated, 1);
    let fetched = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(fetched.status, "confirmed");

    Ok(())
}

/// Tests that someone who does not own the event cannot change the booking.
///
/// Expected: Ok(0) with status still "pending"
#[tokio::test]
async fn does_not_update_for_other_user() -> Result<(), DbErr> {
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
    let updated = repo
        .update_status(booking.id, intruder.id, BookingStatus::Cancelled)
        .await?;

    assert_eq!(updated, 0);
    assert_eq!(repo.get_by_id(booking.id).await?.unwrap().status, "pending");

    Ok(())
}
