//! In-memory service implementations.
//!
//! Every service holds a clone of the same `MemoryStore`, so relationship changes made
//! through one service are visible to the others. Reads take the store's read lock and
//! every mutation runs under a single write lock, which makes each call atomic.

pub mod beer;
pub mod category;
pub mod customer;
pub mod order;

pub use beer::MemoryBeerService;
pub use category::MemoryCategoryService;
pub use customer::MemoryCustomerService;
pub use order::MemoryBeerOrderService;

use uuid::Uuid;

use crate::server::error::AppError;

/// Rejects a write whose expected version differs from the stored one.
fn check_version(
    kind: &str,
    id: Uuid,
    expected: Option<i32>,
    stored: i32,
) -> Result<(), AppError> {
    match expected {
        Some(expected) if expected != stored => Err(AppError::Conflict(format!(
            "{} {} was modified: expected version {}, found {}",
            kind, id, expected, stored
        ))),
        _ => Ok(()),
    }
}
