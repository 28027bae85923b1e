use super::*;

/// Tests listing categories ordered by description.
///
/// Expected: Ok with categories sorted and total count
#[tokio::test]
async fn lists_categories_in_description_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for description in ["Stouts", "Ales", "Lagers"] {
        factory::category::CategoryFactory::new(db)
            .description(description)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let (categories, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(total, 3);
    let descriptions: Vec<&str> = categories.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Ales", "Lagers", "Stouts"]);

    Ok(())
}
