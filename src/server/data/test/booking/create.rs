use super::*;

/// Tests that new bookings start as pending.
///
/// Expected: Ok with status "pending"
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            event_id: event.id,
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            phone: String::new(),
            tickets: 3,
            notes: "Aisle seats".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending.as_str());
    assert_eq!(booking.tickets, 3);
    assert_eq!(booking.event_id, event.id);

    Ok(())
}
