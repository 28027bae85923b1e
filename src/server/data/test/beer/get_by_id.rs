use super::*;

/// Tests getting an existing beer by id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn gets_existing_beer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::beer::BeerFactory::new(db)
        .beer_name("Mango Bobs")
        .beer_style(BeerStyle::Ipa)
        .build()
        .await?;

    let repo = BeerRepository::new(db);
    let beer = repo.get_by_id(Uuid::parse_str(&created.id).unwrap()).await?;

    assert!(beer.is_some());
    let beer = beer.unwrap();
    assert_eq!(beer.beer_name, "Mango Bobs");
    assert_eq!(beer.beer_style, BeerStyle::Ipa);

    Ok(())
}

/// Tests getting an unknown beer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(beer.is_none());
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}
