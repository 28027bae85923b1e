use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyleDto {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

/// Beer as read and written by the API.
///
/// Every field is optional on input; the validators decide which ones a given
/// operation requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub beer_name: Option<String>,
    #[serde(default)]
    pub beer_style: Option<BeerStyleDto>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub quantity_on_hand: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

/// Query parameters accepted by the beer listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BeerListParams {
    /// Case-insensitive substring of the beer name
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyleDto>,
    /// When false, `quantityOnHand` is omitted from every beer (default: true)
    pub show_inventory: Option<bool>,
    /// 1-based page number (default: 1)
    pub page_number: Option<u64>,
    /// Items per page (default: 25, max: 1000)
    pub page_size: Option<u64>,
}
