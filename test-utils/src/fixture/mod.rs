//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let beer = fixture::beer::entity();
//! let stout = fixture::beer::entity_builder()
//!     .beer_style(BeerStyle::Stout)
//!     .build();
//! ```

pub mod beer;
pub mod category;
pub mod customer;

pub use beer::{entity as beer_entity, entity_builder as beer_entity_builder};
pub use category::entity as category_entity;
pub use customer::entity as customer_entity;
