use super::*;

/// Tests replacing a beer's fields.
///
/// Expected: Ok(Some) with new values and version incremented
#[tokio::test]
async fn updates_beer_and_increments_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("Before")).await?;

    let updated = repo.update(beer.id, params("After")).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.beer_name, "After");
    assert_eq!(updated.version, 2);
    assert!(updated.updated_date >= beer.updated_date);
    assert_eq!(updated.created_date, beer.created_date);

    Ok(())
}

/// Tests updating with the version the client read.
///
/// Expected: Ok(Some) when the version matches
#[tokio::test]
async fn accepts_matching_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("Before")).await?;

    let result = repo
        .update(
            beer.id,
            BeerParams {
                version: Some(1),
                ..params("After")
            },
        )
        .await?;

    assert_eq!(result.unwrap().version, 2);

    Ok(())
}

/// Tests updating with a stale version.
///
/// Verifies that a second writer holding the original version is rejected
/// after the first writer bumped it.
///
/// Expected: Err(DbErr::RecordNotUpdated) and stored row unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("Before")).await?;
    repo.update(beer.id, params("First writer")).await?;

    let result = repo
        .update(
            beer.id,
            BeerParams {
                version: Some(1),
                ..params("Second writer")
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    let stored = repo.get_by_id(beer.id).await?.unwrap();
    assert_eq!(stored.beer_name, "First writer");
    assert_eq!(stored.version, 2);

    Ok(())
}

/// Tests updating an unknown beer.
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
    let result = repo.update(Uuid::new_v4(), params("Ghost")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests updating with versions no stored row can carry.
///
/// Expected: Err(DbErr::RecordNotUpdated) for `i32::MAX` and a negative version, row unchanged
#[tokio::test]
async fn rejects_out_of_range_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("Before")).await?;

    for version in [i32::MAX, -1] {
        let result = repo
            .update(
                beer.id,
                BeerParams {
                    version: Some(version),
                    ..params("After")
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }
    let stored = repo.get_by_id(beer.id).await?.unwrap();
    assert_eq!(stored.beer_name, "Before");
    assert_eq!(stored.version, 1);

    Ok(())
}
