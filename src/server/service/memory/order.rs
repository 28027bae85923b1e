use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use super::check_version;
use crate::server::{
    data::memory::{Graph, LineRecord, MemoryStore, OrderRecord},
    error::AppError,
    model::{
        order::{
            BeerOrder, BeerOrderFilter, BeerOrderShipment, CreateBeerOrderParams,
            PatchBeerOrderParams, UpdateBeerOrderParams,
        },
        page::{Page, PageRequest},
    },
    service::order::BeerOrderService,
};

pub struct MemoryBeerOrderService {
    store: MemoryStore,
}

impl MemoryBeerOrderService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn ensure_references(
    graph: &Graph,
    customer_id: Uuid,
    mut beer_ids: impl Iterator<Item = Uuid>,
) -> Result<(), AppError> {
    if !graph.customers.contains_key(&customer_id) {
        return Err(AppError::NotFound(format!(
            "Customer {} not found",
            customer_id
        )));
    }

    if let Some(beer_id) = beer_ids.find(|id| !graph.beers.contains_key(id)) {
        return Err(AppError::NotFound(format!("Beer {} not found", beer_id)));
    }

    Ok(())
}

fn new_line(order_quantity: i32, quantity_allocated: i32, now: DateTime<Utc>) -> LineRecord {
    LineRecord {
        id: Uuid::new_v4(),
        version: 1,
        order_quantity,
        quantity_allocated,
        created_date: now,
        last_modified_date: now,
    }
}

/// Creates the order's shipment or updates its tracking number, linking both sides.
fn set_tracking_number(
    graph: &mut Graph,
    order_id: Uuid,
    tracking_number: String,
    now: DateTime<Utc>,
) {
    if let Some(shipment) = graph
        .shipment_id_of(&order_id)
        .and_then(|id| graph.shipments.get_mut(&id))
    {
        shipment.tracking_number = Some(tracking_number);
        shipment.version += 1;
        shipment.last_modified_date = now;
        return;
    }

    let shipment = BeerOrderShipment {
        id: Uuid::new_v4(),
        version: 1,
        tracking_number: Some(tracking_number),
        created_date: now,
        last_modified_date: now,
    };
    let shipment_id = shipment.id;
    graph.shipments.insert(shipment_id, shipment);
    graph.set_beer_order_shipment(order_id, shipment_id);
}

fn assembled(graph: &Graph, id: Uuid) -> Result<BeerOrder, AppError> {
    graph
        .order(&id)
        .ok_or_else(|| AppError::InternalError(format!("Beer order {} lost its customer", id)))
}

#[async_trait]
impl BeerOrderService for MemoryBeerOrderService {
    async fn list_orders(
        &self,
        filter: BeerOrderFilter,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, AppError> {
        let graph = self.store.read().await;

        let mut orders: Vec<BeerOrder> = graph
            .orders
            .keys()
            .filter_map(|id| graph.order(id))
            .filter(|order| {
                filter
                    .customer_id
                    .is_none_or(|customer_id| order.customer_id == customer_id)
            })
            .collect();
        orders.sort_by(|a, b| a.created_date.cmp(&b.created_date).then(a.id.cmp(&b.id)));

        Ok(Page::from_sorted(orders, page))
    }

    async fn get_order_by_id(&self, id: Uuid) -> Result<Option<BeerOrder>, AppError> {
        Ok(self.store.read().await.order(&id))
    }

    async fn create_order(&self, params: CreateBeerOrderParams) -> Result<BeerOrder, AppError> {
        let mut graph = self.store.write().await;
        ensure_references(
            &graph,
            params.customer_id,
            params.lines.iter().map(|line| line.beer_id),
        )?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        graph.orders.insert(
            id,
            OrderRecord {
                id,
                version: 1,
                customer_ref: params.customer_ref,
                created_date: now,
                last_modified_date: now,
            },
        );
        graph.set_customer(id, params.customer_id);

        for line in params.lines {
            graph.add_line(id, line.beer_id, new_line(line.order_quantity, 0, now));
        }

        if let Some(tracking_number) = params.tracking_number {
            set_tracking_number(&mut graph, id, tracking_number, now);
        }

        let order = assembled(&graph, id)?;

        tracing::info!(
            "Created beer order {} with {} lines for customer {}",
            order.id,
            order.lines.len(),
            order.customer_id
        );

        Ok(order)
    }

    async fn update_order_by_id(
        &self,
        id: Uuid,
        params: UpdateBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError> {
        let mut graph = self.store.write().await;
        let Some(stored_version) = graph.orders.get(&id).map(|order| order.version) else {
            return Ok(None);
        };
        check_version("Beer order", id, params.version, stored_version)?;
        ensure_references(
            &graph,
            params.customer_id,
            params.lines.iter().map(|line| line.beer_id),
        )?;

        let now = Utc::now();
        if let Some(order) = graph.orders.get_mut(&id) {
            order.customer_ref = params.customer_ref;
            order.version += 1;
            order.last_modified_date = now;
        }
        graph.set_customer(id, params.customer_id);

        let existing: HashSet<Uuid> = graph.line_ids_of(&id).into_iter().collect();
        let kept: HashSet<Uuid> = params
            .lines
            .iter()
            .filter_map(|line| line.id)
            .filter(|line_id| existing.contains(line_id))
            .collect();
        for line_id in existing.difference(&kept) {
            graph.remove_line(line_id);
        }

        for line in params.lines {
            match line.id.filter(|line_id| kept.contains(line_id)) {
                Some(line_id) => {
                    if let Some(record) = graph.lines.get_mut(&line_id) {
                        record.order_quantity = line.order_quantity;
                        if let Some(quantity_allocated) = line.quantity_allocated {
                            record.quantity_allocated = quantity_allocated;
                        }
                        record.version += 1;
                        record.last_modified_date = now;
                    }
                    graph.set_line_beer(line_id, line.beer_id);
                }
                None => {
                    let record = new_line(
                        line.order_quantity,
                        line.quantity_allocated.unwrap_or(0),
                        now,
                    );
                    graph.add_line(id, line.beer_id, record);
                }
            }
        }

        if let Some(tracking_number) = params.tracking_number {
            set_tracking_number(&mut graph, id, tracking_number, now);
        }

        assembled(&graph, id).map(Some)
    }

    async fn patch_order_by_id(
        &self,
        id: Uuid,
        params: PatchBeerOrderParams,
    ) -> Result<Option<BeerOrder>, AppError> {
        let mut graph = self.store.write().await;
        let now = Utc::now();
        let Some(order) = graph.orders.get_mut(&id) else {
            return Ok(None);
        };
        check_version("Beer order", id, params.version, order.version)?;

        if let Some(customer_ref) = params.customer_ref {
            order.customer_ref = Some(customer_ref);
        }
        order.version += 1;
        order.last_modified_date = now;

        if let Some(tracking_number) = params.tracking_number {
            set_tracking_number(&mut graph, id, tracking_number, now);
        }

        assembled(&graph, id).map(Some)
    }

    async fn delete_order_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.store.write().await.remove_order(&id))
    }
}
