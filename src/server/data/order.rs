use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::server::data::next_version;
use crate::server::model::{
    order::{
        BeerOrder, BeerOrderFilter, CreateBeerOrderParams, PatchBeerOrderParams,
        UpdateBeerOrderParams,
    },
    page::PageRequest,
};

/// Repository for beer orders together with their lines and shipment.
///
/// The order/shipment link is stored on both rows (`beer_order.beer_order_shipment_id`
/// and `beer_order_shipment.beer_order_id`); `set_shipment` is the only writer of that
/// link and always updates both columns.
pub struct BeerOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BeerOrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets an order with its lines and shipment
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<BeerOrder>, DbErr> {
        let Some(order) = entity::prelude::BeerOrder::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let lines = entity::prelude::BeerOrderLine::find()
            .filter(entity::beer_order_line::Column::BeerOrderId.eq(order.id.clone()))
            .all(self.db)
            .await?;
        let shipment = entity::prelude::BeerOrderShipment::find()
            .filter(entity::beer_order_shipment::Column::BeerOrderId.eq(order.id.clone()))
            .one(self.db)
            .await?;

        BeerOrder::from_entities(order, lines, shipment).map(Some)
    }

    /// Gets a page of orders ordered by creation date with the total count
    pub async fn get_paginated(
        &self,
        filter: &BeerOrderFilter,
        page: PageRequest,
    ) -> Result<(Vec<BeerOrder>, u64), DbErr> {
        let mut query = entity::prelude::BeerOrder::find();
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(entity::beer_order::Column::CustomerId.eq(customer_id.to_string()));
        }

        let paginator = query
            .order_by_asc(entity::beer_order::Column::CreatedDate)
            .order_by_asc(entity::beer_order::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page.index()).await?;
        if orders.is_empty() {
            return Ok((Vec::new(), total));
        }
        let order_ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();

        // Fetch lines and shipments for the whole page in two queries
        let mut lines_by_order: HashMap<String, Vec<entity::beer_order_line::Model>> =
            HashMap::new();
        for line in entity::prelude::BeerOrderLine::find()
            .filter(entity::beer_order_line::Column::BeerOrderId.is_in(order_ids.clone()))
            .all(self.db)
            .await?
        {
            lines_by_order
                .entry(line.beer_order_id.clone())
                .or_default()
                .push(line);
        }

        let mut shipment_by_order: HashMap<String, entity::beer_order_shipment::Model> =
            entity::prelude::BeerOrderShipment::find()
                .filter(entity::beer_order_shipment::Column::BeerOrderId.is_in(order_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.beer_order_id.clone(), s))
                .collect();

        let orders = orders
            .into_iter()
            .map(|order| {
                let lines = lines_by_order.remove(&order.id).unwrap_or_default();
                let shipment = shipment_by_order.remove(&order.id);
                BeerOrder::from_entities(order, lines, shipment)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    /// Inserts an order with its lines and, when a tracking number is given, its shipment
    pub async fn create(&self, params: CreateBeerOrderParams) -> Result<BeerOrder, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        entity::beer_order::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            version: ActiveValue::Set(1),
            customer_ref: ActiveValue::Set(params.customer_ref),
            customer_id: ActiveValue::Set(params.customer_id.to_string()),
            beer_order_shipment_id: ActiveValue::Set(None),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for line in params.lines {
            self.insert_line(id, line.beer_id, line.order_quantity, 0, now)
                .await?;
        }

        if let Some(tracking_number) = params.tracking_number {
            self.set_shipment(id, tracking_number, now).await?;
        }

        self.get_by_id(id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Beer order {} not found after creation", id))
        })
    }

    /// Replaces customer, customer reference and lines of an order
    ///
    /// Lines whose id matches an existing line of this order are updated in place,
    /// other requested lines are inserted and existing lines not mentioned are
    /// deleted. A tracking number creates or updates the shipment.
    ///
    /// # Returns
    /// - `Ok(Some(BeerOrder))` - Updated order with its version incremented
    /// - `Ok(None)` - No order with this id
    /// - `Err(DbErr::RecordNotUpdated)` - Version mismatch
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateBeerOrderParams,
    ) -> Result<Option<BeerOrder>, DbErr> {
        let Some(existing) = entity::prelude::BeerOrder::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = params.version.unwrap_or(existing.version);
        let now = Utc::now();

        self.update_versioned(
            id,
            expected,
            entity::beer_order::ActiveModel {
                version: ActiveValue::Set(next_version(expected)?),
                customer_id: ActiveValue::Set(params.customer_id.to_string()),
                customer_ref: ActiveValue::Set(params.customer_ref),
                last_modified_date: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .await?;

        let existing_lines: HashMap<String, entity::beer_order_line::Model> =
            entity::prelude::BeerOrderLine::find()
                .filter(entity::beer_order_line::Column::BeerOrderId.eq(id.to_string()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|line| (line.id.clone(), line))
                .collect();

        let kept: HashSet<String> = params
            .lines
            .iter()
            .filter_map(|line| line.id.map(|id| id.to_string()))
            .filter(|line_id| existing_lines.contains_key(line_id))
            .collect();

        let removed: Vec<String> = existing_lines
            .keys()
            .filter(|line_id| !kept.contains(*line_id))
            .cloned()
            .collect();
        if !removed.is_empty() {
            entity::prelude::BeerOrderLine::delete_many()
                .filter(entity::beer_order_line::Column::Id.is_in(removed))
                .exec(self.db)
                .await?;
        }

        for line in params.lines {
            let existing_line = line
                .id
                .map(|line_id| line_id.to_string())
                .and_then(|line_id| existing_lines.get(&line_id));

            match existing_line {
                Some(current) => {
                    let mut active: entity::beer_order_line::ActiveModel = current.clone().into();
                    active.version = ActiveValue::Set(current.version + 1);
                    active.beer_id = ActiveValue::Set(line.beer_id.to_string());
                    active.order_quantity = ActiveValue::Set(line.order_quantity);
                    active.quantity_allocated = ActiveValue::Set(
                        line.quantity_allocated.unwrap_or(current.quantity_allocated),
                    );
                    active.last_modified_date = ActiveValue::Set(now);
                    active.update(self.db).await?;
                }
                None => {
                    self.insert_line(
                        id,
                        line.beer_id,
                        line.order_quantity,
                        line.quantity_allocated.unwrap_or(0),
                        now,
                    )
                    .await?;
                }
            }
        }

        if let Some(tracking_number) = params.tracking_number {
            self.set_shipment(id, tracking_number, now).await?;
        }

        self.get_by_id(id).await
    }

    /// Updates the customer reference and/or shipment tracking number
    ///
    /// # Returns
    /// - `Ok(Some(BeerOrder))` - Patched order with its version incremented
    /// - `Ok(None)` - No order with this id
    /// - `Err(DbErr::RecordNotUpdated)` - Version mismatch
    pub async fn patch(
        &self,
        id: Uuid,
        params: PatchBeerOrderParams,
    ) -> Result<Option<BeerOrder>, DbErr> {
        let Some(existing) = entity::prelude::BeerOrder::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };
        let expected = params.version.unwrap_or(existing.version);
        let now = Utc::now();

        let mut active = entity::beer_order::ActiveModel {
            version: ActiveValue::Set(next_version(expected)?),
            last_modified_date: ActiveValue::Set(now),
            ..Default::default()
        };
        if let Some(customer_ref) = params.customer_ref {
            active.customer_ref = ActiveValue::Set(Some(customer_ref));
        }
        self.update_versioned(id, expected, active).await?;

        if let Some(tracking_number) = params.tracking_number {
            self.set_shipment(id, tracking_number, now).await?;
        }

        self.get_by_id(id).await
    }

    /// Deletes an order with its shipment and lines, returning false when the id was unknown
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        if !self.exists(id).await? {
            return Ok(false);
        }

        entity::prelude::BeerOrderShipment::delete_many()
            .filter(entity::beer_order_shipment::Column::BeerOrderId.eq(id.to_string()))
            .exec(self.db)
            .await?;
        entity::prelude::BeerOrderLine::delete_many()
            .filter(entity::beer_order_line::Column::BeerOrderId.eq(id.to_string()))
            .exec(self.db)
            .await?;
        let result = entity::prelude::BeerOrder::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::BeerOrder::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of orders placed by a customer
    pub async fn count_for_customer(&self, customer_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::BeerOrder::find()
            .filter(entity::beer_order::Column::CustomerId.eq(customer_id.to_string()))
            .count(self.db)
            .await
    }

    /// Number of order lines referencing a beer
    pub async fn count_lines_for_beer(&self, beer_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::BeerOrderLine::find()
            .filter(entity::beer_order_line::Column::BeerId.eq(beer_id.to_string()))
            .count(self.db)
            .await
    }

    /// Creates or updates the shipment of an order, writing both sides of the link
    pub async fn set_shipment(
        &self,
        order_id: Uuid,
        tracking_number: String,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::BeerOrderShipment::find()
            .filter(entity::beer_order_shipment::Column::BeerOrderId.eq(order_id.to_string()))
            .one(self.db)
            .await?;

        let shipment_id = match existing {
            Some(shipment) => {
                let shipment_id = shipment.id.clone();
                let version = shipment.version;
                let mut active: entity::beer_order_shipment::ActiveModel = shipment.into();
                active.version = ActiveValue::Set(version + 1);
                active.tracking_number = ActiveValue::Set(Some(tracking_number));
                active.last_modified_date = ActiveValue::Set(now);
                active.update(self.db).await?;
                shipment_id
            }
            None => {
                entity::beer_order_shipment::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4().to_string()),
                    version: ActiveValue::Set(1),
                    beer_order_id: ActiveValue::Set(order_id.to_string()),
                    tracking_number: ActiveValue::Set(Some(tracking_number)),
                    created_date: ActiveValue::Set(now),
                    last_modified_date: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?
                .id
            }
        };

        entity::prelude::BeerOrder::update_many()
            .col_expr(
                entity::beer_order::Column::BeerOrderShipmentId,
                Expr::value(Some(shipment_id)),
            )
            .filter(entity::beer_order::Column::Id.eq(order_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn insert_line(
        &self,
        order_id: Uuid,
        beer_id: Uuid,
        order_quantity: i32,
        quantity_allocated: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::beer_order_line::Model, DbErr> {
        entity::beer_order_line::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            version: ActiveValue::Set(1),
            beer_order_id: ActiveValue::Set(order_id.to_string()),
            beer_id: ActiveValue::Set(beer_id.to_string()),
            order_quantity: ActiveValue::Set(order_quantity),
            quantity_allocated: ActiveValue::Set(quantity_allocated),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    async fn update_versioned(
        &self,
        id: Uuid,
        expected: i32,
        active: entity::beer_order::ActiveModel,
    ) -> Result<(), DbErr> {
        let result = entity::prelude::BeerOrder::update_many()
            .set(active)
            .filter(entity::beer_order::Column::Id.eq(id.to_string()))
            .filter(entity::beer_order::Column::Version.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }
}
