use super::*;
use test_utils::factory::event::EventFactory;

/// Tests that past events are excluded and results are ordered by date.
///
/// Expected: Ok with the two future events, soonest first
#[tokio::test]
async fn returns_future_events_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let now = Utc::now();

    EventFactory::new(db, owner.id)
        .event_date(now - Duration::days(1))
        .build()
        .await?;
    let later = EventFactory::new(db, owner.id)
        .event_date(now + Duration::days(10))
        .build()
        .await?;
    let sooner = EventFactory::new(db, owner.id)
        .event_date(now + Duration::days(2))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo.get_upcoming(None, now).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests filtering upcoming events by business.
///
/// Expected: Ok with only the event linked to the requested business
#[tokio::test]
async fn filters_by_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let business = factory::create_business(db, owner.id).await?;

    let linked = EventFactory::new(db, owner.id)
        .business_id(business.id)
        .build()
        .await?;
    factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_upcoming(Some(business.id), Utc::now()).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, linked.id);

    Ok(())
}
