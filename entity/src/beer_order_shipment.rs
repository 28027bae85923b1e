use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_order_shipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    #[sea_orm(column_type = "Char(Some(36))", unique)]
    pub beer_order_id: String,
    pub tracking_number: Option<String>,
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
}

impl Related<super::beer_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
