//! JSON transfer objects exchanged over the HTTP API.
//!
//! DTOs are serialized in camelCase and carry `ToSchema` so the OpenAPI document
//! describes the exact wire shape. Server-side domain models convert into these at
//! the controller boundary.

pub mod api;
pub mod beer;
pub mod category;
pub mod customer;
pub mod order;
