use sea_orm::entity::prelude::*;

/// Join row for the beer/category many-to-many association.
///
/// A single row answers both directions of the association, so inserting or
/// deleting it updates the beer's categories and the category's beers together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub beer_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Char(Some(36))")]
    pub category_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beer::Entity",
        from = "Column::BeerId",
        to = "super::beer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Beer,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::beer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beer.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
