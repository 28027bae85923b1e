use sea_orm::entity::prelude::*;

/// Persisted beer order.
///
/// `beer_order_shipment_id` is the owning side of the one-to-one shipment link;
/// the shipment row carries the reverse `beer_order_id`. Both columns are written
/// in the same transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    pub customer_ref: Option<String>,
    #[sea_orm(column_type = "Char(Some(36))")]
    pub customer_id: String,
    #[sea_orm(column_type = "Char(Some(36))", nullable)]
    pub beer_order_shipment_id: Option<String>,
    pub created_date: DateTimeUtc,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Customer,
    #[sea_orm(has_many = "super::beer_order_line::Entity")]
    BeerOrderLine,
    #[sea_orm(has_one = "super::beer_order_shipment::Entity")]
    BeerOrderShipment,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::beer_order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrderLine.def()
    }
}

impl Related<super::beer_order_shipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrderShipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
