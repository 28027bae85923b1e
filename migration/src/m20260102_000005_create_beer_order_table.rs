use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeerOrder::Table)
                    .if_not_exists()
                    .col(char_len(BeerOrder::Id, 36).primary_key())
                    .col(integer(BeerOrder::Version))
                    .col(string_null(BeerOrder::CustomerRef))
                    .col(char_len(BeerOrder::CustomerId, 36))
                    // Shipment reference; the shipment table points back with its own FK.
                    .col(char_len_null(BeerOrder::BeerOrderShipmentId, 36))
                    .col(timestamp_with_time_zone(BeerOrder::CreatedDate))
                    .col(timestamp_with_time_zone(BeerOrder::LastModifiedDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_order_customer_id")
                            .from(BeerOrder::Table, BeerOrder::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeerOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeerOrder {
    Table,
    Id,
    Version,
    CustomerRef,
    CustomerId,
    BeerOrderShipmentId,
    CreatedDate,
    LastModifiedDate,
}
