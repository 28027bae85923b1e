use super::*;

/// Tests creating an order with lines and a tracking number.
///
/// Expected: Ok with lines stored and the shipment visible from both rows
#[tokio::test]
async fn creates_order_with_lines_and_shipment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let beer = factory::beer::create_beer(db).await?;

    let repo = BeerOrderRepository::new(db);
    let order = repo
        .create(CreateBeerOrderParams {
            customer_id: uuid(&customer.id),
            customer_ref: Some("ref-1".to_string()),
            lines: vec![NewOrderLine {
                beer_id: uuid(&beer.id),
                order_quantity: 3,
            }],
            tracking_number: Some("TRACK-1".to_string()),
        })
        .await?;

    assert_eq!(order.version, 1);
    assert_eq!(order.customer_ref.as_deref(), Some("ref-1"));
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].order_quantity, 3);
    assert_eq!(order.lines[0].quantity_allocated, 0);

    let shipment = order.shipment.expect("shipment should exist");
    assert_eq!(shipment.tracking_number.as_deref(), Some("TRACK-1"));

    let order_row = entity::prelude::BeerOrder::find_by_id(order.id.to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        order_row.beer_order_shipment_id,
        Some(shipment.id.to_string())
    );
    let shipment_row = entity::prelude::BeerOrderShipment::find_by_id(shipment.id.to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(shipment_row.beer_order_id, order.id.to_string());

    Ok(())
}

/// Tests creating an order without lines or tracking number.
///
/// Expected: Ok with no lines and no shipment
#[tokio::test]
async fn creates_empty_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let repo = BeerOrderRepository::new(db);
    let order = repo
        .create(CreateBeerOrderParams {
            customer_id: uuid(&customer.id),
            customer_ref: None,
            lines: Vec::new(),
            tracking_number: None,
        })
        .await?;

    assert!(order.lines.is_empty());
    assert!(order.shipment.is_none());
    assert_eq!(repo.count_for_customer(uuid(&customer.id)).await?, 1);

    Ok(())
}
