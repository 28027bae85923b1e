use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    pub name: String,
    pub email: Option<String>,
    pub created_date: DateTimeUtc,
    pub updated_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beer_order::Entity")]
    BeerOrder,
}

impl Related<super::beer_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
