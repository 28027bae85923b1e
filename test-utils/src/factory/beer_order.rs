//! Beer order factory for creating orders, order lines and shipments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test orders for an existing customer.
pub struct BeerOrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: String,
    customer_ref: Option<String>,
}

impl<'a> BeerOrderFactory<'a> {
    /// Creates a new BeerOrderFactory for the given customer with no customer reference.
    pub fn new(db: &'a DatabaseConnection, customer_id: impl Into<String>) -> Self {
        Self {
            db,
            customer_id: customer_id.into(),
            customer_ref: None,
        }
    }

    pub fn customer_ref(mut self, customer_ref: impl Into<String>) -> Self {
        self.customer_ref = Some(customer_ref.into());
        self
    }

    /// Builds and inserts the order without lines or shipment.
    pub async fn build(self) -> Result<entity::beer_order::Model, DbErr> {
        let now = Utc::now();
        entity::beer_order::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            customer_ref: ActiveValue::Set(self.customer_ref),
            customer_id: ActiveValue::Set(self.customer_id),
            beer_order_shipment_id: ActiveValue::Set(None),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts an order line for the given order and beer.
pub async fn create_order_line(
    db: &DatabaseConnection,
    beer_order_id: &str,
    beer_id: &str,
    order_quantity: i32,
) -> Result<entity::beer_order_line::Model, DbErr> {
    let now = Utc::now();
    entity::beer_order_line::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        version: ActiveValue::Set(1),
        beer_order_id: ActiveValue::Set(beer_order_id.to_string()),
        beer_id: ActiveValue::Set(beer_id.to_string()),
        order_quantity: ActiveValue::Set(order_quantity),
        quantity_allocated: ActiveValue::Set(0),
        created_date: ActiveValue::Set(now),
        last_modified_date: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates an order for `customer` holding a single line of `beer` with quantity 1.
///
/// # Returns
/// - `Ok((order, line))` - Created order and its line
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_with_line(
    db: &DatabaseConnection,
    customer: &entity::customer::Model,
    beer: &entity::beer::Model,
) -> Result<(entity::beer_order::Model, entity::beer_order_line::Model), DbErr> {
    let order = BeerOrderFactory::new(db, customer.id.clone()).build().await?;
    let line = create_order_line(db, &order.id, &beer.id, 1).await?;

    Ok((order, line))
}

/// Attaches a shipment to an order, writing both sides of the one-to-one link.
pub async fn create_shipment(
    db: &DatabaseConnection,
    order: entity::beer_order::Model,
    tracking_number: impl Into<String>,
) -> Result<(entity::beer_order::Model, entity::beer_order_shipment::Model), DbErr> {
    let now = Utc::now();
    let shipment = entity::beer_order_shipment::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        version: ActiveValue::Set(1),
        beer_order_id: ActiveValue::Set(order.id.clone()),
        tracking_number: ActiveValue::Set(Some(tracking_number.into())),
        created_date: ActiveValue::Set(now),
        last_modified_date: ActiveValue::Set(now),
    }
    .insert(db)
    .await?;

    let mut active: entity::beer_order::ActiveModel = order.into();
    active.beer_order_shipment_id = ActiveValue::Set(Some(shipment.id.clone()));
    let order = active.update(db).await?;

    Ok((order, shipment))
}
