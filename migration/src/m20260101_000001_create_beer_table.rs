use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beer::Table)
                    .if_not_exists()
                    .col(char_len(Beer::Id, 36).primary_key())
                    .col(integer(Beer::Version))
                    .col(string_len(Beer::BeerName, 50))
                    .col(small_integer(Beer::BeerStyle))
                    .col(string_len(Beer::Upc, 255))
                    .col(integer_null(Beer::QuantityOnHand))
                    .col(decimal_len(Beer::Price, 19, 2))
                    .col(timestamp_with_time_zone(Beer::CreatedDate))
                    .col(timestamp_with_time_zone(Beer::UpdatedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beer {
    Table,
    Id,
    Version,
    BeerName,
    BeerStyle,
    Upc,
    QuantityOnHand,
    Price,
    CreatedDate,
    UpdatedDate,
}
