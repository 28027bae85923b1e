//! Beer domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BeerStyle;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::beer::{BeerDto, BeerStyleDto},
    server::util::parse::parse_uuid,
};

/// A beer as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: Uuid,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Beer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Beer)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored id is not a valid UUID
    pub fn from_entity(entity: entity::beer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            version: entity.version,
            beer_name: entity.beer_name,
            beer_style: entity.beer_style,
            upc: entity.upc,
            quantity_on_hand: entity.quantity_on_hand,
            price: entity.price,
            created_date: entity.created_date,
            updated_date: entity.updated_date,
        })
    }

    /// Clears `quantity_on_hand` for listings that hide inventory.
    pub fn without_inventory(mut self) -> Self {
        self.quantity_on_hand = None;
        self
    }

    pub fn into_dto(self) -> BeerDto {
        BeerDto {
            id: Some(self.id),
            version: Some(self.version),
            beer_name: Some(self.beer_name),
            beer_style: Some(self.beer_style.into()),
            upc: Some(self.upc),
            quantity_on_hand: self.quantity_on_hand,
            price: Some(self.price),
            created_date: Some(self.created_date),
            update_date: Some(self.updated_date),
        }
    }
}

/// Validated fields for creating or fully replacing a beer.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerParams {
    /// Version the client last read; the stored version is used when absent.
    pub version: Option<i32>,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
}

/// Fields to overwrite on a partial update. `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerPatch {
    pub version: Option<i32>,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub price: Option<Decimal>,
}

impl BeerPatch {
    /// Copies the supplied fields onto `beer`.
    pub fn apply_to(&self, beer: &mut Beer) {
        if let Some(beer_name) = &self.beer_name {
            beer.beer_name = beer_name.clone();
        }
        if let Some(beer_style) = self.beer_style {
            beer.beer_style = beer_style;
        }
        if let Some(upc) = &self.upc {
            beer.upc = upc.clone();
        }
        if let Some(quantity_on_hand) = self.quantity_on_hand {
            beer.quantity_on_hand = Some(quantity_on_hand);
        }
        if let Some(price) = self.price {
            beer.price = price;
        }
    }
}

/// Criteria for the beer listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerFilter {
    /// Case-insensitive substring of the beer name.
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub show_inventory: bool,
}

impl Default for BeerFilter {
    fn default() -> Self {
        Self {
            beer_name: None,
            beer_style: None,
            show_inventory: true,
        }
    }
}

impl BeerFilter {
    pub fn matches(&self, beer: &Beer) -> bool {
        // ASCII case folding only, the same as SQLite's LIKE
        let name_matches = self.beer_name.as_ref().is_none_or(|name| {
            beer.beer_name
                .to_ascii_lowercase()
                .contains(&name.to_ascii_lowercase())
        });
        let style_matches = self
            .beer_style
            .is_none_or(|style| beer.beer_style == style);

        name_matches && style_matches
    }
}

impl From<BeerStyleDto> for BeerStyle {
    fn from(style: BeerStyleDto) -> Self {
        match style {
            BeerStyleDto::Lager => BeerStyle::Lager,
            BeerStyleDto::Pilsner => BeerStyle::Pilsner,
            BeerStyleDto::Stout => BeerStyle::Stout,
            BeerStyleDto::Gose => BeerStyle::Gose,
            BeerStyleDto::Porter => BeerStyle::Porter,
            BeerStyleDto::Ale => BeerStyle::Ale,
            BeerStyleDto::Wheat => BeerStyle::Wheat,
            BeerStyleDto::Ipa => BeerStyle::Ipa,
            BeerStyleDto::PaleAle => BeerStyle::PaleAle,
            BeerStyleDto::Saison => BeerStyle::Saison,
        }
    }
}

impl From<BeerStyle> for BeerStyleDto {
    fn from(style: BeerStyle) -> Self {
        match style {
            BeerStyle::Lager => BeerStyleDto::Lager,
            BeerStyle::Pilsner => BeerStyleDto::Pilsner,
            BeerStyle::Stout => BeerStyleDto::Stout,
            BeerStyle::Gose => BeerStyleDto::Gose,
            BeerStyle::Porter => BeerStyleDto::Porter,
            BeerStyle::Ale => BeerStyleDto::Ale,
            BeerStyle::Wheat => BeerStyleDto::Wheat,
            BeerStyle::Ipa => BeerStyleDto::Ipa,
            BeerStyle::PaleAle => BeerStyleDto::PaleAle,
            BeerStyle::Saison => BeerStyleDto::Saison,
        }
    }
}
