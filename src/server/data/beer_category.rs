use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{beer::Beer, category::Category};

/// Repository for the beer/category join table.
///
/// A join row is the single source of truth for both directions of the
/// association: inserting or deleting it updates a beer's categories and a
/// category's beers at once.
pub struct BeerCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BeerCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a beer and a category. Returns false when they were already linked.
    pub async fn link(&self, beer_id: Uuid, category_id: Uuid) -> Result<bool, DbErr> {
        let existing =
            entity::prelude::BeerCategory::find_by_id((beer_id.to_string(), category_id.to_string()))
                .one(self.db)
                .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::beer_category::ActiveModel {
            beer_id: ActiveValue::Set(beer_id.to_string()),
            category_id: ActiveValue::Set(category_id.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the link between a beer and a category. Returns false when none existed.
    pub async fn unlink(&self, beer_id: Uuid, category_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::BeerCategory::delete_many()
            .filter(entity::beer_category::Column::BeerId.eq(beer_id.to_string()))
            .filter(entity::beer_category::Column::CategoryId.eq(category_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Categories linked to a beer, ordered by description
    pub async fn categories_for_beer(&self, beer_id: Uuid) -> Result<Vec<Category>, DbErr> {
        entity::prelude::Category::find()
            .inner_join(entity::prelude::BeerCategory)
            .filter(entity::beer_category::Column::BeerId.eq(beer_id.to_string()))
            .order_by_asc(entity::category::Column::Description)
            .all(self.db)
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect()
    }

    /// Beers linked to a category, ordered by name
    pub async fn beers_for_category(&self, category_id: Uuid) -> Result<Vec<Beer>, DbErr> {
        entity::prelude::Beer::find()
            .inner_join(entity::prelude::BeerCategory)
            .filter(entity::beer_category::Column::CategoryId.eq(category_id.to_string()))
            .order_by_asc(entity::beer::Column::BeerName)
            .all(self.db)
            .await?
            .into_iter()
            .map(Beer::from_entity)
            .collect()
    }

    /// Removes every link of a beer, returning the number of links removed
    pub async fn unlink_all_for_beer(&self, beer_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::BeerCategory::delete_many()
            .filter(entity::beer_category::Column::BeerId.eq(beer_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every link of a category, returning the number of links removed
    pub async fn unlink_all_for_category(&self, category_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::BeerCategory::delete_many()
            .filter(entity::beer_category::Column::CategoryId.eq(category_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
