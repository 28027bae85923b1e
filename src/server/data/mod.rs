//! Data layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories are generic over `ConnectionTrait`, so services hand them a transaction.
//!
//! `memory` holds the in-memory graph used by the memory service variants and `seed`
//! the sample data shared by both backends.

use sea_orm::DbErr;

pub mod beer;
pub mod beer_category;
pub mod category;
pub mod customer;
pub mod memory;
pub mod order;
pub mod seed;

#[cfg(test)]
mod test;

/// Version written by a versioned update. A version that cannot be incremented can never
/// match a stored row, so it reports as a lost update.
pub(crate) fn next_version(expected: i32) -> Result<i32, DbErr> {
    expected.checked_add(1).ok_or(DbErr::RecordNotUpdated)
}
