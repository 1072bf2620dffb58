use super::*;

/// Tests creating a business and reading it back.
///
/// Expected: Ok with all fields persisted and owner recorded
#[tokio::test]
async fn creates_business() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::user::create_user_with_role(db, "business_owner").await?;

    let repo = BusinessRepository::new(db);
    let business = repo.create(create_params(owner.id, "Bean There")).await?;

    assert_eq!(business.owner_id, owner.id);
    assert_eq!(business.name, "Bean There");
    assert_eq!(business.rating, 4.5);

    let fetched = repo.get_by_id(business.id).await?.unwrap();
    assert_eq!(fetched.name, "Bean There");
    assert_eq!(fetched.address, "1 Main St");

    Ok(())
}

/// Tests that all businesses are listed newest first.
///
/// Expected: Ok with the most recently created business first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = BusinessRepository::new(db);
    let first = repo.create(create_params(owner.id, "First")).await?;
    let second = repo.create(create_params(owner.id, "Second")).await?;

    let all = repo.get_all().await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);

    Ok(())
}
