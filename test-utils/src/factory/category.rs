//! Category factory for creating test categories and beer/category links.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with description `"Category {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            description: format!("Category {}", next_id()),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity with version 1
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();
        entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            description: ActiveValue::Set(self.description),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Inserts the join row associating a beer with a category.
///
/// # Arguments
/// - `db` - Database connection
/// - `beer_id` - Id of an existing beer
/// - `category_id` - Id of an existing category
///
/// # Returns
/// - `Ok(entity::beer_category::Model)` - Created join row
/// - `Err(DbErr)` - Database error, including a foreign key violation for unknown ids
pub async fn link_beer_category(
    db: &DatabaseConnection,
    beer_id: &str,
    category_id: &str,
) -> Result<entity::beer_category::Model, DbErr> {
    entity::beer_category::ActiveModel {
        beer_id: ActiveValue::Set(beer_id.to_string()),
        category_id: ActiveValue::Set(category_id.to_string()),
    }
    .insert(db)
    .await
}
