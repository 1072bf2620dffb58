use super::*;

/// Tests that only the owner's businesses are returned.
///
/// Expected: Ok with one business for each owner
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_business(db, alice.id).await?;
    let bobs = factory::create_business(db, bob.id).await?;

    let repo = BusinessRepository::new(db);
    let result = repo.get_by_owner(bob.id).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, bobs.id);

    Ok(())
}

/// Tests an owner with no businesses.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_owner_without_businesses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = BusinessRepository::new(db);

    assert!(repo.get_by_owner(owner.id).await?.is_empty());

    Ok(())
}
