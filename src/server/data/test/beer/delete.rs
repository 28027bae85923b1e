use super::*;

/// Tests deleting an existing beer.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_existing_beer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let beer = factory::beer::create_beer(db).await?;
    let id = Uuid::parse_str(&beer.id).unwrap();

    let repo = BeerRepository::new(db);
    assert!(repo.delete(id).await?);
    assert!(repo.get_by_id(id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown beer.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
