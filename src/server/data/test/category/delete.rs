use super::*;

/// Tests deleting a category.
///
/// Expected: Ok(true), then Ok(false) for the same id
#[tokio::test]
async fn deletes_category_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    assert!(repo.delete(category.id).await?);
    assert!(!repo.delete(category.id).await?);

    Ok(())
}
