use super::*;

/// Tests filtering orders by customer.
///
/// Expected: Ok with only the matching customer's orders, lines attached
#[tokio::test]
async fn filters_by_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::customer::create_customer(db).await?;
    let second = factory::customer::create_customer(db).await?;
    let beer = factory::beer::create_beer(db).await?;
    factory::beer_order::create_order_with_line(db, &first, &beer).await?;
    factory::beer_order::create_order_with_line(db, &first, &beer).await?;
    factory::beer_order::create_order_with_line(db, &second, &beer).await?;

    let repo = BeerOrderRepository::new(db);
    let filter = BeerOrderFilter {
        customer_id: Some(uuid(&first.id)),
    };
    let (orders, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 2);
    assert!(orders.iter().all(|o| o.customer_id == uuid(&first.id)));
    assert!(orders.iter().all(|o| o.lines.len() == 1));

    let (all, total) = repo
        .get_paginated(&BeerOrderFilter::default(), PageRequest::default())
        .await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that a page past the end is empty but still reports the total.
///
/// Expected: Ok with no orders and total 1
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let beer = factory::beer::create_beer(db).await?;
    factory::beer_order::create_order_with_line(db, &customer, &beer).await?;

    let repo = BeerOrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated(&BeerOrderFilter::default(), PageRequest::new(Some(5), Some(10)))
        .await?;

    assert!(orders.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests that shipments are attached when listing.
///
/// Expected: Ok with the shipment's tracking number on the listed order
#[tokio::test]
async fn attaches_shipments() -> Result<(), DbErr> {
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
    factory::beer_order::create_shipment(db, order, "TRACK-9").await?;

    let repo = BeerOrderRepository::new(db);
    let (orders, _) = repo
        .get_paginated(&BeerOrderFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(
        orders[0]
            .shipment
            .as_ref()
            .and_then(|s| s.tracking_number.as_deref()),
        Some("TRACK-9")
    );

    Ok(())
}
