//! HTTP request handlers.
//!
//! Each module owns the routes of one resource: it turns request DTOs into validated
//! params, calls the matching service through `AppState`, and converts domain models
//! back into DTOs. Unknown IDs surface as `AppError::NotFound`. Authentication has
//! already happened in the middleware by the time a handler runs.

pub mod beer;
pub mod category;
pub mod customer;
pub mod order;

#[cfg(test)]
mod test;
