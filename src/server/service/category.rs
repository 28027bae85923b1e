use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::server::{
    data::{beer_category::BeerCategoryRepository, category::CategoryRepository},
    error::AppError,
    model::{
        beer::Beer,
        category::{Category, CategoryParams, CategoryPatch},
        page::{Page, PageRequest},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, AppError>;

    async fn get_category_by_id(&self, id: Uuid) -> Result<Option<Category>, AppError>;

    async fn save_new_category(&self, params: CategoryParams) -> Result<Category, AppError>;

    async fn update_category_by_id(
        &self,
        id: Uuid,
        params: CategoryParams,
    ) -> Result<Option<Category>, AppError>;

    async fn patch_category_by_id(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, AppError>;

    /// Deletes a category after unlinking it from every beer.
    async fn delete_category_by_id(&self, id: Uuid) -> Result<bool, AppError>;

    /// Beers in a category ordered by name. `None` when the category doesn't exist.
    async fn list_beers(&self, category_id: Uuid) -> Result<Option<Vec<Beer>>, AppError>;
}

pub struct DbCategoryService {
    db: DatabaseConnection,
}

impl DbCategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryService for DbCategoryService {
    async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, AppError> {
        let txn = self.db.begin().await?;

        let (categories, total) = CategoryRepository::new(&txn).get_paginated(page).await?;

        txn.commit().await?;

        Ok(Page::new(categories, total, page))
    }

    async fn get_category_by_id(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        let txn = self.db.begin().await?;

        let category = CategoryRepository::new(&txn).get_by_id(id).await?;

        txn.commit().await?;

        Ok(category)
    }

    async fn save_new_category(&self, params: CategoryParams) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;

        let category = CategoryRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created category {} ({})", category.id, category.description);

        Ok(category)
    }

    async fn update_category_by_id(
        &self,
        id: Uuid,
        params: CategoryParams,
    ) -> Result<Option<Category>, AppError> {
        let txn = self.db.begin().await?;

        let category = CategoryRepository::new(&txn).update(id, params).await?;

        txn.commit().await?;

        Ok(category)
    }

    async fn patch_category_by_id(
        &self,
        id: Uuid,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, AppError> {
        let txn = self.db.begin().await?;

        let category = CategoryRepository::new(&txn).patch(id, patch).await?;

        txn.commit().await?;

        Ok(category)
    }

    async fn delete_category_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        BeerCategoryRepository::new(&txn)
            .unlink_all_for_category(id)
            .await?;
        let deleted = repo.delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    async fn list_beers(&self, category_id: Uuid) -> Result<Option<Vec<Beer>>, AppError> {
        let txn = self.db.begin().await?;

        if !CategoryRepository::new(&txn).exists(category_id).await? {
            return Ok(None);
        }

        let beers = BeerCategoryRepository::new(&txn)
            .beers_for_category(category_id)
            .await?;

        txn.commit().await?;

        Ok(Some(beers))
    }
}
