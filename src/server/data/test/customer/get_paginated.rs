use super::*;

/// Tests listing customers ordered by name across pages.
///
/// Expected: Ok with first page of two and total three
#[tokio::test]
async fn lists_customers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Carol", "Alice", "Bob"] {
        factory::customer::CustomerFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = CustomerRepository::new(db);
    let (customers, total) = repo.get_paginated(PageRequest::new(Some(1), Some(2))).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    Ok(())
}
