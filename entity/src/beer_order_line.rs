use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_order_line")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    #[sea_orm(column_type = "Char(Some(36))")]
    pub beer_order_id: String,
    #[sea_orm(column_type = "Char(Some(36))")]
    pub beer_id: String,
    pub order_quantity: i32,
    pub quantity_allocated: i32,
    pub created_date: DateTimeUtc,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beer_order::Entity",
        from = "Column::BeerOrderId",
        to = "super::beer_order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BeerOrder,
    #[sea_orm(
        belongs_to = "super::beer::Entity",
        from = "Column::BeerId",
        to = "super::beer::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Beer,
}

impl Related<super::beer_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrder.def()
    }
}

impl Related<super::beer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
