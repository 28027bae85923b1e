//! Application state shared across all request handlers.
//!
//! `AppState` holds the four entity services behind trait objects together with the
//! bearer token verifier. The state is built once during startup, for either the
//! database or the in-memory backend, and cloned into each handler through Axum's
//! state extraction. Every field is an `Arc`, so clones are cheap.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::memory::MemoryStore,
    service::{
        beer::{BeerService, DbBeerService},
        category::{CategoryService, DbCategoryService},
        customer::{CustomerService, DbCustomerService},
        jwt::JwtVerifier,
        memory::{
            MemoryBeerOrderService, MemoryBeerService, MemoryCategoryService,
            MemoryCustomerService,
        },
        order::{BeerOrderService, DbBeerOrderService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub beers: Arc<dyn BeerService>,
    pub categories: Arc<dyn CategoryService>,
    pub customers: Arc<dyn CustomerService>,
    pub orders: Arc<dyn BeerOrderService>,

    /// Verifier consulted by the auth middleware on every request.
    pub jwt: Arc<JwtVerifier>,
}

impl AppState {
    pub fn new(
        beers: Arc<dyn BeerService>,
        categories: Arc<dyn CategoryService>,
        customers: Arc<dyn CustomerService>,
        orders: Arc<dyn BeerOrderService>,
        jwt: Arc<JwtVerifier>,
    ) -> Self {
        Self {
            beers,
            categories,
            customers,
            orders,
            jwt,
        }
    }

    /// State whose services run one transaction per call against `db`.
    pub fn database(db: DatabaseConnection, jwt: Arc<JwtVerifier>) -> Self {
        Self::new(
            Arc::new(DbBeerService::new(db.clone())),
            Arc::new(DbCategoryService::new(db.clone())),
            Arc::new(DbCustomerService::new(db.clone())),
            Arc::new(DbBeerOrderService::new(db)),
            jwt,
        )
    }

    /// State whose services share one in-memory store.
    pub fn memory(store: MemoryStore, jwt: Arc<JwtVerifier>) -> Self {
        Self::new(
            Arc::new(MemoryBeerService::new(store.clone())),
            Arc::new(MemoryCategoryService::new(store.clone())),
            Arc::new(MemoryCustomerService::new(store.clone())),
            Arc::new(MemoryBeerOrderService::new(store)),
            jwt,
        )
    }
}
