use super::*;
use crate::server::data::booking::BookingRepository;

/// Tests that deleting an event removes its bookings.
///
/// Expected: Ok(1), booking gone
#[tokio::test]
async fn deletes_event_and_its_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let booking = factory::create_booking(db, event.id).await?;

    let repo = EventRepository::new(db);

    assert_eq!(repo.delete(event.id, owner.id).await?, 1);
    assert!(!repo.exists(event.id).await?);
    assert!(!BookingRepository::new(db).exists(booking.id).await?);

    Ok(())
}

/// Tests that a non-owner cannot delete an event.
///
/// Expected: Ok(0), event still present
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
    let event = factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);

    assert_eq!(repo.delete(event.id, intruder.id).await?, 0);
    assert!(repo.exists(event.id).await?);

    Ok(())
}
