use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub id: String,
    pub version: i32,
    pub description: String,
    pub created_date: DateTimeUtc,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beer_category::Entity")]
    BeerCategory,
}

impl Related<super::beer_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerCategory.def()
    }
}

impl Related<super::beer::Entity> for Entity {
    fn to() -> RelationDef {
        super::beer_category::Relation::Beer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::beer_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
