use super::*;

/// Tests creating a customer.
///
/// Expected: Ok with id assigned, version 1, fields stored
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("Thirsty")).await?;

    assert_eq!(customer.version, 1);
    assert_eq!(customer.name, "Thirsty");
    assert_eq!(customer.email.as_deref(), Some("someone@example.com"));

    let stored = repo.get_by_id(customer.id).await?;
    assert_eq!(stored, Some(customer));

    Ok(())
}
