use super::*;

/// Tests that linking a category to a beer is visible from both sides.
///
/// Expected: beer lists the category and the category lists the beer
#[tokio::test]
async fn link_is_visible_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::beer::create_beer(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = BeerCategoryRepository::new(db);
    assert!(repo.link(uuid(&beer.id), uuid(&category.id)).await?);

    let categories = repo.categories_for_beer(uuid(&beer.id)).await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].description, category.description);

    let beers = repo.beers_for_category(uuid(&category.id)).await?;
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0].beer_name, beer.beer_name);

    Ok(())
}

/// Tests that linking twice keeps a single join row.
///
/// Expected: second link returns false, one row stored
#[tokio::test]
async fn linking_twice_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::beer::create_beer(db).await?;
    let category = factory::category::create_category(db).await?;

    let repo = BeerCategoryRepository::new(db);
    assert!(repo.link(uuid(&beer.id), uuid(&category.id)).await?);
    assert!(!repo.link(uuid(&beer.id), uuid(&category.id)).await?);

    assert_eq!(entity::prelude::BeerCategory::find().count(db).await?, 1);

    Ok(())
}
