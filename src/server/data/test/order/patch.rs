use super::*;

/// Tests patching an order with a tracking number when no shipment exists.
///
/// Expected: shipment created, customer reference unchanged
#[tokio::test]
async fn patch_creates_shipment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let order = factory::beer_order::BeerOrderFactory::new(db, customer.id.clone())
        .customer_ref("keep")
        .build()
        .await?;

    let repo = BeerOrderRepository::new(db);
    let patched = repo
        .patch(
            uuid(&order.id),
            PatchBeerOrderParams {
                version: None,
                customer_ref: None,
                tracking_number: Some("SHIP-1".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(patched.customer_ref.as_deref(), Some("keep"));
    assert_eq!(patched.version, 2);
    assert_eq!(
        patched.shipment.and_then(|s| s.tracking_number).as_deref(),
        Some("SHIP-1")
    );

    Ok(())
}

/// Tests patching an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerOrderRepository::new(db);
    let result = repo
        .patch(
            Uuid::new_v4(),
            PatchBeerOrderParams {
                version: None,
                customer_ref: Some("x".to_string()),
                tracking_number: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests patching an order with versions no stored row can carry.
///
/// Expected: Err(DbErr::RecordNotUpdated) for `i32::MAX` and a negative version
#[tokio::test]
async fn rejects_out_of_range_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let order = factory::beer_order::BeerOrderFactory::new(db, customer.id.clone())
        .build()
        .await?;

    let repo = BeerOrderRepository::new(db);
    for version in [i32::MAX, -1] {
        let result = repo
            .patch(
                uuid(&order.id),
                PatchBeerOrderParams {
                    version: Some(version),
                    customer_ref: Some("x".to_string()),
                    tracking_number: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }

    Ok(())
}
