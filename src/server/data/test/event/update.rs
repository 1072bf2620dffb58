use super::*;

/// Tests updating an owned event's title and price.
///
/// Expected: Ok(1) with changed fields persisted and the rest untouched
#[tokio::test]
async fn updates_owned_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(UpdateEventParams {
            id: event.id,
            owner_id: owner.id,
            title: Some("Renamed".to_string()),
            price: Some(0.0),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated, 1);
    let fetched = repo.get_by_id(event.id).await?.unwrap();
    assert_eq!(fetched.title, "Renamed");
    assert_eq!(fetched.price, 0.0);
    assert_eq!(fetched.event_date, event.event_date);

    Ok(())
}

/// Tests that a non-owner's update changes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn does_not_update_for_other_owner() -> Result<(), DbErr> {
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
    let updated = repo
        .update(UpdateEventParams {
            id: event.id,
            owner_id: intruder.id,
            title: Some("Hijacked".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated, 0);
    assert_eq!(repo.get_by_id(event.id).await?.unwrap().title, event.title);

    Ok(())
}
