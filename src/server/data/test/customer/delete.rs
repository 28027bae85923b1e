use super::*;

/// Tests deleting customers.
///
/// Expected: Ok(true) for an existing customer, Ok(false) for an unknown id
#[tokio::test]
async fn deletes_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    assert!(repo.delete(Uuid::parse_str(&customer.id).unwrap()).await?);
    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
