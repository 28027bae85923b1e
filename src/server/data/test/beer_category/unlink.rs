use super::*;

/// Tests that unlinking reverses a link exactly.
///
/// Expected: neither side lists the other afterwards, other links untouched
#[tokio::test]
async fn unlink_reverses_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::beer::create_beer(db).await?;
    let ales = factory::category::CategoryFactory::new(db)
        .description("Ales")
        .build()
        .await?;
    let pale = factory::category::CategoryFactory::new(db)
        .description("Pale")
        .build()
        .await?;
    factory::category::link_beer_category(db, &beer.id, &ales.id).await?;
    factory::category::link_beer_category(db, &beer.id, &pale.id).await?;

    let repo = BeerCategoryRepository::new(db);
    assert!(repo.unlink(uuid(&beer.id), uuid(&ales.id)).await?);
    assert!(!repo.unlink(uuid(&beer.id), uuid(&ales.id)).await?);

    assert!(repo.beers_for_category(uuid(&ales.id)).await?.is_empty());
    let remaining = repo.categories_for_beer(uuid(&beer.id)).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].description, "Pale");

    Ok(())
}

/// Tests removing every link of a category.
///
/// Expected: Ok with the number of removed links and no beers left on the category
#[tokio::test]
async fn unlink_all_for_category_removes_every_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::beer::create_beer(db).await?;
    let second = factory::beer::create_beer(db).await?;
    let category = factory::category::create_category(db).await?;
    factory::category::link_beer_category(db, &first.id, &category.id).await?;
    factory::category::link_beer_category(db, &second.id, &category.id).await?;

    let repo = BeerCategoryRepository::new(db);
    assert_eq!(repo.unlink_all_for_category(uuid(&category.id)).await?, 2);

    assert!(repo.categories_for_beer(uuid(&first.id)).await?.is_empty());
    assert!(repo.categories_for_beer(uuid(&second.id)).await?.is_empty());

    Ok(())
}
