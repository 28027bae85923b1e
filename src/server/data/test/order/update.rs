use super::*;

/// Tests replacing the lines of an order.
///
/// Expected: kept line updated in place, dropped line removed, new line inserted
#[tokio::test]
async fn syncs_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let beer = factory::beer::create_beer(db).await?;
    let other_beer = factory::beer::create_beer(db).await?;
    let (order, kept) = factory::beer_order::create_order_with_line(db, &customer, &beer).await?;
    let dropped = factory::beer_order::create_order_line(db, &order.id, &beer.id, 5).await?;

    let repo = BeerOrderRepository::new(db);
    let updated = repo
        .update(
            uuid(&order.id),
            UpdateBeerOrderParams {
                version: Some(1),
                customer_id: uuid(&customer.id),
                customer_ref: Some("updated".to_string()),
                lines: vec![
                    OrderLineParams {
                        id: Some(uuid(&kept.id)),
                        beer_id: uuid(&beer.id),
                        order_quantity: 10,
                        quantity_allocated: Some(4),
                    },
                    OrderLineParams {
                        id: None,
                        beer_id: uuid(&other_beer.id),
                        order_quantity: 2,
                        quantity_allocated: None,
                    },
                ],
                tracking_number: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.version, 2);
    assert_eq!(updated.customer_ref.as_deref(), Some("updated"));
    assert_eq!(updated.lines.len(), 2);

    let kept_line = updated
        .lines
        .iter()
        .find(|l| l.id == uuid(&kept.id))
        .unwrap();
    assert_eq!(kept_line.order_quantity, 10);
    assert_eq!(kept_line.quantity_allocated, 4);
    assert_eq!(kept_line.version, 2);

    assert!(updated.lines.iter().all(|l| l.id != uuid(&dropped.id)));
    assert!(updated
        .lines
        .iter()
        .any(|l| l.beer_id == uuid(&other_beer.id) && l.order_quantity == 2));

    Ok(())
}

/// Tests that a tracking number on update replaces the existing shipment's number.
///
/// Expected: same shipment id, new tracking number
#[tokio::test]
async fn updates_existing_shipment() -> Result<(), DbErr> {
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
    let (order, shipment) = factory::beer_order::create_shipment(db, order, "OLD").await?;

    let repo = BeerOrderRepository::new(db);
    let updated = repo
        .update(
            uuid(&order.id),
            UpdateBeerOrderParams {
                version: None,
                customer_id: uuid(&customer.id),
                customer_ref: None,
                lines: Vec::new(),
                tracking_number: Some("NEW".to_string()),
            },
        )
        .await?
        .unwrap();

    let updated_shipment = updated.shipment.unwrap();
    assert_eq!(updated_shipment.id, uuid(&shipment.id));
    assert_eq!(updated_shipment.tracking_number.as_deref(), Some("NEW"));

    Ok(())
}

/// Tests updating with a stale version.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
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
    let result = repo
        .update(
            uuid(&order.id),
            UpdateBeerOrderParams {
                version: Some(9),
                customer_id: uuid(&customer.id),
                customer_ref: None,
                lines: Vec::new(),
                tracking_number: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests updating an order with versions no stored row can carry.
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
            .update(
                uuid(&order.id),
                UpdateBeerOrderParams {
                    version: Some(version),
                    customer_id: uuid(&customer.id),
                    customer_ref: None,
                    lines: Vec::new(),
                    tracking_number: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }

    Ok(())
}
