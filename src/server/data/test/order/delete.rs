use super::*;

/// Tests deleting an order with lines and a shipment.
///
/// Expected: Ok(true) and no lines left for the beer
#[tokio::test]
async fn deletes_order_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let beer = factory::beer::create_beer(db).await?;
    let (order, _) = factory::beer_order::create_order_with_line(db, &customer, &beer).await?;
    factory::beer_order::create_shipment(db, order.clone(), "T-1").await?;

    let repo = BeerOrderRepository::new(db);
    assert_eq!(repo.count_lines_for_beer(uuid(&beer.id)).await?, 1);

    assert!(repo.delete(uuid(&order.id)).await?);

    assert!(!repo.exists(uuid(&order.id)).await?);
    assert_eq!(repo.count_lines_for_beer(uuid(&beer.id)).await?, 0);
    assert_eq!(repo.count_for_customer(uuid(&customer.id)).await?, 0);

    Ok(())
}

/// Tests deleting an unknown order.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_brewery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerOrderRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
