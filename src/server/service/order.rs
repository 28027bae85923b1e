use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::server::{
    data::{beer::BeerRepository, customer::CustomerRepository, order::BeerOrderRepository},
    error::AppError,
    model::{
        order::{
            BeerOrder, BeerOrderFilter, CreateBeerOrderParams, PatchBeerOrderParams,
            UpdateBeerOrderParams,
        },
        page::{Page, PageRequest},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BeerOrderService: Send + Sync {
    /// Lists orders ordered by creation date, optionally for one customer.
    async fn list_orders(
        &self,
        filter: BeerOrderFilter,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, AppError>;

    async fn get_order_by_id(&self, id: Uuid) -> Result<Option<BeerOrder>, AppError>;

    /// Places an order with its lines and optional shipment.
    ///
    /// # Returns
    /// - `Ok(BeerOrder)` - Created order
    /// - `Err(AppError::NotFound)` - Customer or one of the beers doesn't exist
    async fn create_order(&self, params: CreateBeerOrderParams) -> Result<BeerOrder, AppError>;

    /// Replaces customer, reference, lines and shipment tracking of an order.
    ///
    /// # Returns
    /// - `Ok(Some(BeerOrder))` - Updated order
    /// - `Ok(None)` - No order with this id
    /// - `Err(AppError::NotFound)` - Customer or one of the beers doesn't exist
    async fn update_order_by_id(
        &self,
        id: Uuid,
        params: UpdateBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError>;

    async fn patch_order_by_id(
        &self,
        id: Uuid,
        params: PatchBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError>;

    async fn delete_order_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct DbBeerOrderService {
    db: DatabaseConnection,
}

impl DbBeerOrderService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Fails with `NotFound` unless the customer and every beer exist.
async fn ensure_references<C: ConnectionTrait>(
    db: &C,
    customer_id: Uuid,
    beer_ids: &[Uuid],
) -> Result<(), AppError> {
    if !CustomerRepository::new(db).exists(customer_id).await? {
        return Err(AppError::NotFound(format!(
            "Customer {} not found",
            customer_id
        )));
    }

    let beers = BeerRepository::new(db);
    for &beer_id in beer_ids {
        if !beers.exists(beer_id).await? {
            return Err(AppError::NotFound(format!("Beer {} not found", beer_id)));
        }
    }

    Ok(())
}

#[async_trait]
impl BeerOrderService for DbBeerOrderService {
    async fn list_orders(
        &self,
        filter: BeerOrderFilter,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, AppError> {
        let txn = self.db.begin().await?;

        let (orders, total) = BeerOrderRepository::new(&txn)
            .get_paginated(&filter, page)
            .await?;

        txn.commit().await?;

        Ok(Page::new(orders, total, page))
    }

    async fn get_order_by_id(&self, id: Uuid) -> Result<Option<BeerOrder>, AppError> {
        let txn = self.db.begin().await?;

        let order = BeerOrderRepository::new(&txn).get_by_id(id).await?;

        txn.commit().await?;

        Ok(order)
    }

    async fn create_order(&self, params: CreateBeerOrderParams) -> Result<BeerOrder, AppError> {
        let txn = self.db.begin().await?;

        let beer_ids: Vec<Uuid> = params.lines.iter().map(|line| line.beer_id).collect();
        ensure_references(&txn, params.customer_id, &beer_ids).await?;

        let order = BeerOrderRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created beer order {} with {} lines for customer {}",
            order.id,
            order.lines.len(),
            order.customer_id
        );

        Ok(order)
    }

    async fn update_order_by_id(
        &self,
        id: Uuid,
        params: UpdateBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError> {
        let txn = self.db.begin().await?;
        let repo = BeerOrderRepository::new(&txn);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let beer_ids: Vec<Uuid> = params.lines.iter().map(|line| line.beer_id).collect();
        ensure_references(&txn, params.customer_id, &beer_ids).await?;

        let order = repo.update(id, params).await?;

        txn.commit().await?;

        Ok(order)
    }

    async fn patch_order_by_id(
        &self,
        id: Uuid,
        params: PatchBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError> {
        let txn = self.db.begin().await?;

        let order = BeerOrderRepository::new(&txn).patch(id, params).await?;

        txn.commit().await?;

        Ok(order)
    }

    async fn delete_order_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = BeerOrderRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
