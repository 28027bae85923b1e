//! Beer fixtures for creating in-memory test data.

use chrono::Utc;
use entity::{beer, sea_orm_active_enums::BeerStyle};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Default test beer name.
pub const DEFAULT_BEER_NAME: &str = "Galaxy Cat";

/// Default test UPC.
pub const DEFAULT_UPC: &str = "12356";

/// Default quantity on hand.
pub const DEFAULT_QUANTITY_ON_HAND: Option<i32> = Some(122);

/// Default price in cents, converted to a two-place decimal.
pub const DEFAULT_PRICE_CENTS: i64 = 1299;

/// Creates a beer entity model with default values.
pub fn entity() -> beer::Model {
    entity_builder().build()
}

/// Creates a builder for a customized beer entity model.
pub fn entity_builder() -> BeerEntityBuilder {
    BeerEntityBuilder::default()
}

/// Builder for creating customized beer entity models.
pub struct BeerEntityBuilder {
    id: Uuid,
    beer_name: String,
    beer_style: BeerStyle,
    upc: String,
    quantity_on_hand: Option<i32>,
    price: Decimal,
}

impl Default for BeerEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            beer_name: DEFAULT_BEER_NAME.to_string(),
            beer_style: BeerStyle::PaleAle,
            upc: DEFAULT_UPC.to_string(),
            quantity_on_hand: DEFAULT_QUANTITY_ON_HAND,
            price: Decimal::new(DEFAULT_PRICE_CENTS, 2),
        }
    }
}

impl BeerEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
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

    /// Builds the beer entity model with version 1 and current timestamps.
    pub fn build(self) -> beer::Model {
        let now = Utc::now();

        beer::Model {
            id: self.id.to_string(),
            version: 1,
            beer_name: self.beer_name,
            beer_style: self.beer_style,
            upc: self.upc,
            quantity_on_hand: self.quantity_on_hand,
            price: self.price,
            created_date: now,
            updated_date: now,
        }
    }
}
