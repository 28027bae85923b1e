use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BeerStyle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    pub created_date: DateTimeUtc,
    pub updated_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beer_category::Entity")]
    BeerCategory,
    #[sea_orm(has_many = "super::beer_order_line::Entity")]
    BeerOrderLine,
}

impl Related<super::beer_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerCategory.def()
    }
}

impl Related<super::beer_order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrderLine.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::beer_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::beer_category::Relation::Beer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
