use super::*;

/// Tests replacing a customer's fields, including clearing the email.
///
/// Expected: Ok(Some) with new name, no email, version 2
#[tokio::test]
async fn updates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("Before")).await?;

    let updated = repo
        .update(
            customer.id,
            CustomerParams {
                version: None,
                name: "After".to_string(),
                email: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, None);
    assert_eq!(updated.version, 2);

    Ok(())
}

/// Tests updating an unknown customer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);

    assert!(repo.update(Uuid::new_v4(), params("Ghost")).await?.is_none());

    Ok(())
}

/// Tests updating a customer with versions no stored row can carry.
///
/// Expected: Err(DbErr::RecordNotUpdated) for `i32::MAX` and a negative version
#[tokio::test]
async fn rejects_out_of_range_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("Before")).await?;

    for version in [i32::MAX, -1] {
        let result = repo
            .update(
                customer.id,
                CustomerParams {
                    version: Some(version),
                    name: "After".to_string(),
                    email: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }

    Ok(())
}
