//! Service layer for business logic orchestration.
//!
//! Each entity family has a trait (`BeerService`, `CategoryService`, `CustomerService`,
//! `BeerOrderService`) with two implementations: a database variant that runs every
//! call as one transaction over the repositories in `data/`, and an in-memory variant
//! in `memory/` backed by a shared `MemoryStore`. Controllers only see the traits
//! through `AppState`, so either backend can be selected at startup.
//!
//! `jwt` holds the bearer token verifier used by the auth middleware.

pub mod beer;
pub mod category;
pub mod customer;
pub mod jwt;
pub mod memory;
pub mod order;
