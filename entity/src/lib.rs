//! SeaORM entity models for the brewery schema.
//!
//! Every table keys its rows by a UUID stored as `CHAR(36)` text; conversion to
//! `uuid::Uuid` happens at the repository boundary in the server crate.

pub mod prelude;

pub mod beer;
pub mod beer_category;
pub mod beer_order;
pub mod beer_order_line;
pub mod beer_order_shipment;
pub mod category;
pub mod customer;
pub mod sea_orm_active_enums;
