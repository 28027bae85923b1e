use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::check_version;
use crate::server::{
    data::memory::MemoryStore,
    error::AppError,
    model::{
        customer::{Customer, CustomerParams, CustomerPatch},
        page::{Page, PageRequest},
    },
    service::customer::CustomerService,
};

pub struct MemoryCustomerService {
    store: MemoryStore,
}

impl MemoryCustomerService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerService for MemoryCustomerService {
    async fn list_customers(&self, page: PageRequest) -> Result<Page<Customer>, AppError> {
        let graph = self.store.read().await;

        let mut customers: Vec<Customer> = graph.customers.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(Page::from_sorted(customers, page))
    }

    async fn get_customer_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        Ok(self.store.read().await.customers.get(&id).cloned())
    }

    async fn save_new_customer(&self, params: CustomerParams) -> Result<Customer, AppError> {
        let customer = self.store.write().await.insert_customer(params);

        tracing::info!("Created customer {}", customer.id);

        Ok(customer)
    }

    async fn update_customer_by_id(
        &self,
        id: Uuid,
        params: CustomerParams,
    ) -> Result<Option<Customer>, AppError> {
        let mut graph = self.store.write().await;
        let Some(customer) = graph.customers.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Customer", id, params.version, customer.version)?;

        customer.name = params.name;
        customer.email = params.email;
        customer.version += 1;
        customer.updated_date = Utc::now();

        Ok(Some(customer.clone()))
    }

    async fn patch_customer_by_id(
        &self,
        id: Uuid,
        patch: CustomerPatch,
    ) -> Result<Option<Customer>, AppError> {
        let mut graph = self.store.write().await;
        let Some(customer) = graph.customers.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Customer", id, patch.version, customer.version)?;

        patch.apply_to(customer);
        customer.version += 1;
        customer.updated_date = Utc::now();

        Ok(Some(customer.clone()))
    }

    async fn delete_customer_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let mut graph = self.store.write().await;

        if graph.customer_has_orders(&id) {
            return Err(AppError::Conflict(format!(
                "Customer {} still has orders",
                id
            )));
        }

        Ok(graph.customers.remove(&id).is_some())
    }
}
