use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(char_len(Category::Id, 36).primary_key())
                    .col(integer(Category::Version))
                    .col(string_len(Category::Description, 255))
                    .col(timestamp_with_time_zone(Category::CreatedDate))
                    .col(timestamp_with_time_zone(Category::LastModifiedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Version,
    Description,
    CreatedDate,
    LastModifiedDate,
}
