use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok(1), name changed, other columns untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = BusinessRepository::new(db);
    let business = repo.create(create_params(owner.id, "Old Name")).await?;

    let updated = repo
        .update(UpdateBusinessParams {
            id: business.id,
            owner_id: owner.id,
            name: Some("New Name".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated, 1);
    let fetched = repo.get_by_id(business.id).await?.unwrap();
    assert_eq!(fetched.name, "New Name");
    assert_eq!(fetched.category, "Cafe");
    assert_eq!(fetched.rating, 4.5);

    Ok(())
}

/// Tests that a non-owner cannot update a business.
///
/// Expected: Ok(0), row unchanged
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

    let repo = BusinessRepository::new(db);
    let business = repo.create(create_params(owner.id, "Mine")).await?;

    let updated = repo
        .update(UpdateBusinessParams {
            id: business.id,
            owner_id: intruder.id,
            name: Some("Stolen".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated, 0);
    assert_eq!(repo.get_by_id(business.id).await?.unwrap().name, "Mine");

    Ok(())
}
