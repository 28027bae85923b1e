use super::*;

/// Tests creating a new beer.
///
/// Verifies that the repository assigns an id, version 1 and timestamps, and
/// stores every supplied field.
///
/// Expected: Ok with beer created
#[tokio::test]
async fn creates_beer_with_generated_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("My Beer")).await?;

    assert_eq!(beer.version, 1);
    assert_eq!(beer.beer_name, "My Beer");
    assert_eq!(beer.beer_style, BeerStyle::PaleAle);
    assert_eq!(beer.upc, "23423424234");
    assert_eq!(beer.price, Decimal::new(1199, 2));
    assert_eq!(beer.created_date, beer.updated_date);

    // Verify beer exists in database
    let stored = entity::prelude::Beer::find_by_id(beer.id.to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that each created beer receives a distinct id.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let first = repo.create(params("First")).await?;
    let second = repo.create(params("Second")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
