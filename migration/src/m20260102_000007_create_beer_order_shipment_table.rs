use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000005_create_beer_order_table::BeerOrder;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeerOrderShipment::Table)
                    .if_not_exists()
                    .col(char_len(BeerOrderShipment::Id, 36).primary_key())
                    .col(integer(BeerOrderShipment::Version))
                    .col(char_len_uniq(BeerOrderShipment::BeerOrderId, 36))
                    .col(string_null(BeerOrderShipment::TrackingNumber))
                    .col(timestamp_with_time_zone(BeerOrderShipment::CreatedDate))
                    .col(timestamp_with_time_zone(
                        BeerOrderShipment::LastModifiedDate,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_order_shipment_beer_order_id")
                            .from(BeerOrderShipment::Table, BeerOrderShipment::BeerOrderId)
                            .to(BeerOrder::Table, BeerOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeerOrderShipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeerOrderShipment {
    Table,
    Id,
    Version,
    BeerOrderId,
    TrackingNumber,
    CreatedDate,
    LastModifiedDate,
}
