use super::*;

/// Tests patching only the email.
///
/// Expected: Ok(Some) with name unchanged and new email
#[tokio::test]
async fn patches_email_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("Keep Me")).await?;

    let patched = repo
        .patch(
            customer.id,
            CustomerPatch {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(patched.name, "Keep Me");
    assert_eq!(patched.email.as_deref(), Some("new@example.com"));

    Ok(())
}

/// Tests patching a customer with versions no stored row can carry.
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
    let customer = repo.create(params("Keep Me")).await?;

    for version in [i32::MAX, -1] {
        let result = repo
            .patch(
                customer.id,
                CustomerPatch {
                    version: Some(version),
                    name: Some("Changed".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }

    Ok(())
}
