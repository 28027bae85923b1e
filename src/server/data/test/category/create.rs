use super::*;

/// Tests creating a new category.
///
/// Expected: Ok with id assigned, version 1 and description stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    assert_eq!(category.version, 1);
    assert_eq!(category.description, "Ales");
    assert!(repo.exists(category.id).await?);

    Ok(())
}
