use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::server::{
    data::{
        beer::BeerRepository, beer_category::BeerCategoryRepository,
        category::CategoryRepository, order::BeerOrderRepository,
    },
    error::AppError,
    model::{
        beer::{Beer, BeerFilter, BeerParams, BeerPatch},
        category::Category,
        page::{Page, PageRequest},
    },
};

/// Beer catalogue operations including the beer side of the category link.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Lists beers matching `filter`, ordered by name.
    ///
    /// When `filter.show_inventory` is false the returned beers carry no
    /// `quantity_on_hand`.
    async fn list_beers(&self, filter: BeerFilter, page: PageRequest)
        -> Result<Page<Beer>, AppError>;

    async fn get_beer_by_id(&self, id: Uuid) -> Result<Option<Beer>, AppError>;

    async fn save_new_beer(&self, params: BeerParams) -> Result<Beer, AppError>;

    /// Replaces every mutable field. `None` when the beer doesn't exist.
    async fn update_beer_by_id(&self, id: Uuid, params: BeerParams)
        -> Result<Option<Beer>, AppError>;

    /// Overwrites only the supplied fields. `None` when the beer doesn't exist.
    async fn patch_beer_by_id(&self, id: Uuid, patch: BeerPatch)
        -> Result<Option<Beer>, AppError>;

    /// Deletes a beer and its category links.
    ///
    /// # Returns
    /// - `Ok(true)` - Beer deleted
    /// - `Ok(false)` - No beer with this id
    /// - `Err(AppError::Conflict)` - Beer is still referenced by order lines
    async fn delete_beer_by_id(&self, id: Uuid) -> Result<bool, AppError>;

    /// Categories of a beer ordered by description. `None` when the beer doesn't exist.
    async fn list_categories(&self, beer_id: Uuid) -> Result<Option<Vec<Category>>, AppError>;

    /// Links a category to a beer. Returns false when either side is unknown.
    async fn add_category(&self, beer_id: Uuid, category_id: Uuid) -> Result<bool, AppError>;

    /// Unlinks a category from a beer. Returns false when either side is unknown.
    async fn remove_category(&self, beer_id: Uuid, category_id: Uuid)
        -> Result<bool, AppError>;
}

pub struct DbBeerService {
    db: DatabaseConnection,
}

impl DbBeerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BeerService for DbBeerService {
    async fn list_beers(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> Result<Page<Beer>, AppError> {
        let txn = self.db.begin().await?;

        let (beers, total) = BeerRepository::new(&txn)
            .get_paginated(&filter, page)
            .await?;

        txn.commit().await?;

        let page = Page::new(beers, total, page);
        if filter.show_inventory {
            Ok(page)
        } else {
            Ok(page.map(Beer::without_inventory))
        }
    }

    async fn get_beer_by_id(&self, id: Uuid) -> Result<Option<Beer>, AppError> {
        let txn = self.db.begin().await?;

        let beer = BeerRepository::new(&txn).get_by_id(id).await?;

        txn.commit().await?;

        Ok(beer)
    }

    async fn save_new_beer(&self, params: BeerParams) -> Result<Beer, AppError> {
        let txn = self.db.begin().await?;

        let beer = BeerRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created beer {} ({})", beer.id, beer.beer_name);

        Ok(beer)
    }

    async fn update_beer_by_id(
        &self,
        id: Uuid,
        params: BeerParams,
    ) -> Result<Option<Beer>, AppError> {
        let txn = self.db.begin().await?;

        let beer = BeerRepository::new(&txn).update(id, params).await?;

        txn.commit().await?;

        Ok(beer)
    }

    async fn patch_beer_by_id(
        &self,
        id: Uuid,
        patch: BeerPatch,
    ) -> Result<Option<Beer>, AppError> {
        let txn = self.db.begin().await?;

        let beer = BeerRepository::new(&txn).patch(id, patch).await?;

        txn.commit().await?;

        Ok(beer)
    }

    async fn delete_beer_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = BeerRepository::new(&txn);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        if BeerOrderRepository::new(&txn).count_lines_for_beer(id).await? > 0 {
            return Err(AppError::Conflict(format!(
                "Beer {} is referenced by order lines",
                id
            )));
        }

        BeerCategoryRepository::new(&txn)
            .unlink_all_for_beer(id)
            .await?;
        let deleted = repo.delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    async fn list_categories(&self, beer_id: Uuid) -> Result<Option<Vec<Category>>, AppError> {
        let txn = self.db.begin().await?;

        if !BeerRepository::new(&txn).exists(beer_id).await? {
            return Ok(None);
        }

        let categories = BeerCategoryRepository::new(&txn)
            .categories_for_beer(beer_id)
            .await?;

        txn.commit().await?;

        Ok(Some(categories))
    }

    async fn add_category(&self, beer_id: Uuid, category_id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if !BeerRepository::new(&txn).exists(beer_id).await?
            || !CategoryRepository::new(&txn).exists(category_id).await?
        {
            return Ok(false);
        }

        BeerCategoryRepository::new(&txn)
            .link(beer_id, category_id)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    async fn remove_category(
        &self,
        beer_id: Uuid,
        category_id: Uuid,
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if !BeerRepository::new(&txn).exists(beer_id).await?
            || !CategoryRepository::new(&txn).exists(category_id).await?
        {
            return Ok(false);
        }

        BeerCategoryRepository::new(&txn)
            .unlink(beer_id, category_id)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
