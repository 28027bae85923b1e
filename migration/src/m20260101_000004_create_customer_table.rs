use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(char_len(Customer::Id, 36).primary_key())
                    .col(integer(Customer::Version))
                    .col(string_len(Customer::Name, 255))
                    .col(string_len_null(Customer::Email, 255))
                    .col(timestamp_with_time_zone(Customer::CreatedDate))
                    .col(timestamp_with_time_zone(Customer::UpdatedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Version,
    Name,
    Email,
    CreatedDate,
    UpdatedDate,
}
