use super::*;

/// Tests that an owner sees bookings for their own events only.
///
/// Expected: Ok with the two bookings on the owner's event
#[tokio::test]
async fn returns_bookings_for_owned_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owned_event = factory::create_event(db, owner.id).await?;
    let other_event = factory::create_event(db, other.id).await?;

    let first = factory::create_booking(db, owned_event.id).await?;
    let second = factory::create_booking(db, owned_event.id).await?;
    factory::create_booking(db, other_event.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_for_event_owner(owner.id).await?;

    let mut ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
