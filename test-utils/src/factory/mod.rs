//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and handle
//! foreign key dependencies where an entity needs a parent row.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let beer = factory::beer::create_beer(&db).await?;
//!     let customer = factory::customer::create_customer(&db).await?;
//!     let (order, line) = factory::beer_order::create_order_with_line(&db, &customer, &beer).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let beer = factory::beer::BeerFactory::new(&db)
//!     .beer_name("Mango Bobs")
//!     .beer_style(BeerStyle::Ipa)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `beer` - Create beer entities
//! - `category` - Create category entities and beer/category links
//! - `customer` - Create customer entities
//! - `beer_order` - Create orders, order lines and shipments

pub mod beer;
pub mod beer_order;
pub mod category;
pub mod customer;
pub mod helpers;

pub use beer::create_beer;
pub use beer_order::create_order_with_line;
pub use category::{create_category, link_beer_category};
pub use customer::create_customer;
