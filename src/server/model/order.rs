//! Beer order domain models and parameters.
//!
//! An order is assembled from three stores: the order row, its lines and its
//! optional shipment. The customer link and the shipment link are both
//! bidirectional; see `server::data::order` and `server::data::memory` for how
//! each backend keeps the two directions together.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::order::{BeerOrderDto, BeerOrderLineDto, BeerOrderShipmentDto},
    server::util::parse::parse_uuid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrderLine {
    pub id: Uuid,
    pub version: i32,
    pub beer_id: Uuid,
    pub order_quantity: i32,
    pub quantity_allocated: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl BeerOrderLine {
    pub fn from_entity(entity: entity::beer_order_line::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            version: entity.version,
            beer_id: parse_uuid(&entity.beer_id)?,
            order_quantity: entity.order_quantity,
            quantity_allocated: entity.quantity_allocated,
            created_date: entity.created_date,
            last_modified_date: entity.last_modified_date,
        })
    }

    pub fn into_dto(self) -> BeerOrderLineDto {
        BeerOrderLineDto {
            id: self.id,
            version: self.version,
            beer_id: self.beer_id,
            order_quantity: self.order_quantity,
            quantity_allocated: self.quantity_allocated,
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrderShipment {
    pub id: Uuid,
    pub version: i32,
    pub tracking_number: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl BeerOrderShipment {
    pub fn from_entity(entity: entity::beer_order_shipment::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid(&entity.id)?,
            version: entity.version,
            tracking_number: entity.tracking_number,
            created_date: entity.created_date,
            last_modified_date: entity.last_modified_date,
        })
    }

    pub fn into_dto(self) -> BeerOrderShipmentDto {
        BeerOrderShipmentDto {
            id: self.id,
            version: self.version,
            tracking_number: self.tracking_number,
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeerOrder {
    pub id: Uuid,
    pub version: i32,
    pub customer_ref: Option<String>,
    pub customer_id: Uuid,
    pub lines: Vec<BeerOrderLine>,
    pub shipment: Option<BeerOrderShipment>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl BeerOrder {
    /// Assembles an order from its row, lines and shipment.
    ///
    /// Lines are ordered by creation date so responses are stable.
    pub fn from_entities(
        order: entity::beer_order::Model,
        lines: Vec<entity::beer_order_line::Model>,
        shipment: Option<entity::beer_order_shipment::Model>,
    ) -> Result<Self, DbErr> {
        let mut lines = lines
            .into_iter()
            .map(BeerOrderLine::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        lines.sort_by(|a, b| a.created_date.cmp(&b.created_date).then(a.id.cmp(&b.id)));

        Ok(Self {
            id: parse_uuid(&order.id)?,
            version: order.version,
            customer_ref: order.customer_ref,
            customer_id: parse_uuid(&order.customer_id)?,
            lines,
            shipment: shipment.map(BeerOrderShipment::from_entity).transpose()?,
            created_date: order.created_date,
            last_modified_date: order.last_modified_date,
        })
    }

    pub fn into_dto(self) -> BeerOrderDto {
        BeerOrderDto {
            id: self.id,
            version: self.version,
            customer_ref: self.customer_ref,
            customer_id: self.customer_id,
            beer_order_lines: self.lines.into_iter().map(BeerOrderLine::into_dto).collect(),
            beer_order_shipment: self.shipment.map(BeerOrderShipment::into_dto),
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
        }
    }
}

/// A line requested on a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBeerOrderParams {
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub lines: Vec<NewOrderLine>,
    /// Creates a shipment with this tracking number when present.
    pub tracking_number: Option<String>,
}

/// A line on a replaced order. Lines with a known `id` are updated in place,
/// others are inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineParams {
    pub id: Option<Uuid>,
    pub beer_id: Uuid,
    pub order_quantity: i32,
    pub quantity_allocated: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBeerOrderParams {
    pub version: Option<i32>,
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub lines: Vec<OrderLineParams>,
    /// Creates or updates the shipment when present; leaves it untouched otherwise.
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchBeerOrderParams {
    pub version: Option<i32>,
    pub customer_ref: Option<String>,
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerOrderFilter {
    pub customer_id: Option<Uuid>,
}
