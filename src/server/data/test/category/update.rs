use super::*;

/// Tests replacing a category description.
///
/// Expected: Ok(Some) with new description and version 2
#[tokio::test]
async fn updates_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    let updated = repo.update(category.id, params("Pale Ales")).await?.unwrap();

    assert_eq!(updated.description, "Pale Ales");
    assert_eq!(updated.version, 2);

    Ok(())
}

/// Tests that an empty patch still bumps the version and keeps the description.
///
/// Expected: Ok(Some) with description unchanged
#[tokio::test]
async fn empty_patch_keeps_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    let patched = repo
        .patch(category.id, CategoryPatch::default())
        .await?
        .unwrap();

    assert_eq!(patched.description, "Ales");
    assert_eq!(patched.version, 2);

    Ok(())
}

/// Tests updating a category with a stale version.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    let result = repo
        .update(
            category.id,
            CategoryParams {
                version: Some(7),
                description: "Lagers".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests updating a category with versions no stored row can carry.
///
/// Expected: Err(DbErr::RecordNotUpdated) for `i32::MAX` and a negative version
#[tokio::test]
async fn rejects_out_of_range_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo.create(params("Ales")).await?;

    for version in [i32::MAX, -1] {
        let result = repo
            .update(
                category.id,
                CategoryParams {
                    version: Some(version),
                    description: "Lagers".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    }

    Ok(())
}

/// Tests updating an unknown category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.update(Uuid::new_v4(), params("Ales")).await?.is_none());

    Ok(())
}
