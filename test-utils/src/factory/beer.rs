//! Beer factory for creating test beer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::BeerStyle;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test beers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::beer::BeerFactory;
///
/// let beer = BeerFactory::new(&db)
///     .beer_name("Mango Bobs")
///     .beer_style(BeerStyle::Ipa)
///     .build()
///     .await?;
/// ```
pub struct BeerFactory<'a> {
    db: &'a DatabaseConnection,
    beer_name: String,
    beer_style: BeerStyle,
    upc: String,
    quantity_on_hand: Option<i32>,
    price: Decimal,
}

impl<'a> BeerFactory<'a> {
    /// Creates a new BeerFactory with default values.
    ///
    /// Defaults:
    /// - beer_name: `"Beer {id}"` where id is auto-incremented
    /// - beer_style: `BeerStyle::PaleAle`
    /// - upc: `"{id}"`
    /// - quantity_on_hand: `Some(100)`
    /// - price: `12.99`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            beer_name: format!("Beer {}", id),
            beer_style: BeerStyle::PaleAle,
            upc: id.to_string(),
            quantity_on_hand: Some(100),
            price: Decimal::new(1299, 2),
        }
    }

    pub fn beer_name(mut self, beer_name: impl Into<String>) -> Self {
        self.beer_name = beer_name.into();
        self
    }

    pub fn beer_style(mut self, beer_style: BeerStyle) -> Self {
        self.beer_style = beer_style;
        self
    }

    pub fn upc(mut self, upc: impl Into<String>) -> Self {
        self.upc = upc.into();
        self
    }

    pub fn quantity_on_hand(mut self, quantity_on_hand: Option<i32>) -> Self {
        self.quantity_on_hand = quantity_on_hand;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the beer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::beer::Model)` - Created beer entity with version 1
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::beer::Model, DbErr> {
        let now = Utc::now();
        entity::beer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            beer_name: ActiveValue::Set(self.beer_name),
            beer_style: ActiveValue::Set(self.beer_style),
            upc: ActiveValue::Set(self.upc),
            quantity_on_hand: ActiveValue::Set(self.quantity_on_hand),
            price: ActiveValue::Set(self.price),
            created_date: ActiveValue::Set(now),
            updated_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a beer with default values.
///
/// Shorthand for `BeerFactory::new(db).build().await`.
pub async fn create_beer(db: &DatabaseConnection) -> Result<entity::beer::Model, DbErr> {
    BeerFactory::new(db).build().await
}
