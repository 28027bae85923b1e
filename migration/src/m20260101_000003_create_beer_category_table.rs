use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_beer_table::Beer, m20260101_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeerCategory::Table)
                    .if_not_exists()
                    .col(char_len(BeerCategory::BeerId, 36))
                    .col(char_len(BeerCategory::CategoryId, 36))
                    .primary_key(
                        Index::create()
                            .name("pk_beer_category")
                            .col(BeerCategory::BeerId)
                            .col(BeerCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_category_beer_id")
                            .from(BeerCategory::Table, BeerCategory::BeerId)
                            .to(Beer::Table, Beer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beer_category_category_id")
                            .from(BeerCategory::Table, BeerCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeerCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BeerCategory {
    Table,
    BeerId,
    CategoryId,
}
