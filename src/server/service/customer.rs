use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::server::{
    data::{customer::CustomerRepository, order::BeerOrderRepository},
    error::AppError,
    model::{
        customer::{Customer, CustomerParams, CustomerPatch},
        page::{Page, PageRequest},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn list_customers(&self, page: PageRequest) -> Result<Page<Customer>, AppError>;

    async fn get_customer_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError>;

    async fn save_new_customer(&self, params: CustomerParams) -> Result<Customer, AppError>;

    async fn update_customer_by_id(
        &self,
        id: Uuid,
        params: CustomerParams,
    ) -> Result<Option<Customer>, AppError>;

    async fn patch_customer_by_id(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, AppError>;

    /// Deletes a customer.
    ///
    /// # Returns
    /// - `Ok(true)` - Customer deleted
    /// - `Ok(false)` - No customer with this id
    /// - `Err(AppError::Conflict)` - Customer still owns orders
    async fn delete_customer_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct DbCustomerService {
    db: DatabaseConnection,
}

impl DbCustomerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerService for DbCustomerService {
    async fn list_customers(&self, page: PageRequest) -> Result<Page<Customer>, AppError> {
        let txn = self.db.begin().await?;

        let (customers, total) = CustomerRepository::new(&txn).get_paginated(page).await?;

        txn.commit().await?;

        Ok(Page::new(customers, total, page))
    }

    async fn get_customer_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let txn = self.db.begin().await?;

        let customer = CustomerRepository::new(&txn).get_by_id(id).await?;

        txn.commit().await?;

        Ok(customer)
    }

    async fn save_new_customer(&self, params: CustomerParams) -> Result<Customer, AppError> {
        let txn = self.db.begin().await?;

        let customer = CustomerRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created customer {}", customer.id);

        Ok(customer)
    }

    async fn update_customer_by_id(
        &self,
        id: Uuid,
        params: CustomerParams,
    ) -> Result<Option<Customer>, AppError> {
        let txn = self.db.begin().await?;

        let customer = CustomerRepository::new(&txn).update(id, params).await?;

        txn.commit().await?;

        Ok(customer)
    }

    async fn patch_customer_by_id(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, AppError> {
        let txn = self.db.begin().await?;

        let customer = CustomerRepository::new(&txn).patch(id, patch).await?;

        txn.commit().await?;

        Ok(customer)
    }

    async fn delete_customer_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = CustomerRepository::new(&txn);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        if BeerOrderRepository::new(&txn).count_for_customer(id).await? > 0 {
            return Err(AppError::Conflict(format!(
                "Customer {} still has orders",
                id
            )));
        }

        let deleted = repo.delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests deleting a customer that owns an order.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn delete_refuses_customer_with_orders() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_brewery_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let customer = factory::customer::create_customer(&db).await?;
        factory::beer_order::BeerOrderFactory::new(&db, customer.id.clone())
            .build()
            .await?;

        let service = DbCustomerService::new(db);
        let result = service
            .delete_customer_by_id(Uuid::parse_str(&customer.id).unwrap())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests the create, patch and delete cycle.
    ///
    /// Expected: patch keeps the name, delete returns true once
    #[tokio::test]
    async fn create_patch_delete() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_brewery_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let service = DbCustomerService::new(db);
        let customer = service
            .save_new_customer(CustomerParams {
                version: None,
                name: "Ada".to_string(),
                email: None,
            })
            .await?;

        let patched = service
            .patch_customer_by_id(
                customer.id,
                CustomerPatch {
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();
        assert_eq!(patched.name, "Ada");
        assert_eq!(patched.email.as_deref(), Some("ada@example.com"));

        assert!(service.delete_customer_by_id(customer.id).await?);
        assert!(!service.delete_customer_by_id(customer.id).await?);

        Ok(())
    }
}
