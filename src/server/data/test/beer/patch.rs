use super::*;

/// Tests that a patch only overwrites supplied fields.
///
/// Expected: Ok(Some) with the new name and every other field unchanged
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.create(params("Before")).await?;

    let patched = repo
        .patch(
            beer.id,
            BeerPatch {
                beer_name: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(patched.beer_name, "After");
    assert_eq!(patched.beer_style, beer.beer_style);
    assert_eq!(patched.upc, beer.upc);
    assert_eq!(patched.quantity_on_hand, beer.quantity_on_hand);
    assert_eq!(patched.price, beer.price);
    assert_eq!(patched.version, 2);

    Ok(())
}

/// Tests patching an unknown beer.
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
    let result = repo.patch(Uuid::new_v4(), BeerPatch::default()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests patching with versions no stored row can carry.
///
/// Expected: Err(DbErr::RecordNotUpdated) for `i32::MAX` and a negative version
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
            .patch(
                beer.id,
                BeerPatch {
                    version: Some(version),
                    beer_name: Some("After".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }
    assert_eq!(repo.get_by_id(beer.id).await?.unwrap().beer_name, "Before");

    Ok(())
}
