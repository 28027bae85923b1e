use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_beer_table::Beer, m20260102_000005_create_beer_order_table::BeerOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeerOrderLine::Table)
                    .if_not_exists()
                    .col(char_len(BeerOrderLine::Id, 36).primary_key())
                    .col(integer(BeerOrderLine::Version))
                    .col(char_len(BeerOrderLine::BeerOrderId, 36))
                    .col(char_len(BeerOrderLine::BeerId, 36))
                    .col(integer(BeerOrderLine::OrderQuantity))
                    .col(integer(BeerOrderLine::QuantityAllocated).default(0))
                    .col(timestamp_with_time_zone(BeerOrderLine::CreatedDate))
                    .col(timestamp_with_time_zone(BeerOrderLine::LastModifiedDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_order_line_beer_order_id")
                            .from(BeerOrderLine::Table, BeerOrderLine::BeerOrderId)
                            .to(BeerOrder::Table, BeerOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_order_line_beer_id")
                            .from(BeerOrderLine::Table, BeerOrderLine::BeerId)
                            .to(Beer::Table, Beer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeerOrderLine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeerOrderLine {
    Table,
    Id,
    Version,
    BeerOrderId,
    BeerId,
    OrderQuantity,
    QuantityAllocated,
    CreatedDate,
    LastModifiedDate,
}
