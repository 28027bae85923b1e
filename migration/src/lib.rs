pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_beer_table;
mod m20260101_000002_create_category_table;
mod m20260101_000003_create_beer_category_table;
mod m20260101_000004_create_customer_table;
mod m20260102_000005_create_beer_order_table;
mod m20260102_000006_create_beer_order_line_table;
mod m20260102_000007_create_beer_order_shipment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_beer_table::Migration),
            Box::new(m20260101_000002_create_category_table::Migration),
            Box::new(m20260101_000003_create_beer_category_table::Migration),
            Box::new(m20260101_000004_create_customer_table::Migration),
            Box::new(m20260102_000005_create_beer_order_table::Migration),
            Box::new(m20260102_000006_create_beer_order_line_table::Migration),
            Box::new(m20260102_000007_create_beer_order_shipment_table::Migration),
        ]
    }
}
