use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineDto {
    pub id: Uuid,
    pub version: i32,
    pub beer_id: Uuid,
    pub order_quantity: i32,
    pub quantity_allocated: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderShipmentDto {
    pub id: Uuid,
    pub version: i32,
    pub tracking_number: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderDto {
    pub id: Uuid,
    pub version: i32,
    pub customer_ref: Option<String>,
    pub customer_id: Uuid,
    pub beer_order_lines: Vec<BeerOrderLineDto>,
    pub beer_order_shipment: Option<BeerOrderShipmentDto>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineCreateDto {
    #[serde(default)]
    pub beer_id: Option<Uuid>,
    #[serde(default)]
    pub order_quantity: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderShipmentUpdateDto {
    #[serde(default)]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderCreateDto {
    #[serde(default)]
    pub customer_ref: Option<String>,
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub beer_order_lines: Vec<BeerOrderLineCreateDto>,
    #[serde(default)]
    pub beer_order_shipment: Option<BeerOrderShipmentUpdateDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineUpdateDto {
    /// Existing line to update; a new line is created when absent
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub beer_id: Option<Uuid>,
    #[serde(default)]
    pub order_quantity: Option<i32>,
    #[serde(default)]
    pub quantity_allocated: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderUpdateDto {
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub customer_ref: Option<String>,
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub beer_order_lines: Vec<BeerOrderLineUpdateDto>,
    #[serde(default)]
    pub beer_order_shipment: Option<BeerOrderShipmentUpdateDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderPatchDto {
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub customer_ref: Option<String>,
    #[serde(default)]
    pub beer_order_shipment: Option<BeerOrderShipmentUpdateDto>,
}

/// Query parameters accepted by the order listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BeerOrderListParams {
    /// Only orders placed by this customer
    pub customer_id: Option<Uuid>,
    /// 1-based page number (default: 1)
    pub page_number: Option<u64>,
    /// Items per page (default: 25, max: 1000)
    pub page_size: Option<u64>,
}
