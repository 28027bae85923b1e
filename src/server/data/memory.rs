//! In-memory entity graph backing the memory service variants.
//!
//! Records are kept in per-entity maps; every association lives in a paired
//! forward/reverse index from `server::model::relation`, and the helpers on
//! `Graph` are the only way to change a link. The whole graph sits behind one
//! async `RwLock`, so each service call observes and mutates a consistent graph.

use chrono::{DateTime, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::server::{
    data::seed,
    model::{
        beer::{Beer, BeerParams},
        category::Category,
        customer::{Customer, CustomerParams},
        order::{BeerOrder, BeerOrderLine, BeerOrderShipment},
        relation::{ManyToMany, OneToMany, OneToOne},
    },
};

/// Order row without its associations.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: Uuid,
    pub version: i32,
    pub customer_ref: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

/// Order line row without its order and beer links.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub id: Uuid,
    pub version: i32,
    pub order_quantity: i32,
    pub quantity_allocated: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Graph {
    pub beers: HashMap<Uuid, Beer>,
    pub categories: HashMap<Uuid, Category>,
    pub customers: HashMap<Uuid, Customer>,
    pub orders: HashMap<Uuid, OrderRecord>,
    pub lines: HashMap<Uuid, LineRecord>,
    pub shipments: HashMap<Uuid, BeerOrderShipment>,

    beer_categories: ManyToMany<Uuid, Uuid>,
    customer_orders: OneToMany<Uuid, Uuid>,
    order_lines: OneToMany<Uuid, Uuid>,
    beer_lines: OneToMany<Uuid, Uuid>,
    order_shipment: OneToOne<Uuid, Uuid>,
}

impl Graph {
    /// Adds `category_id` to the beer's categories and the beer to the category's beers.
    ///
    /// Returns false when either record is unknown.
    pub fn add_category(&mut self, beer_id: Uuid, category_id: Uuid) -> bool {
        if !self.beers.contains_key(&beer_id) || !self.categories.contains_key(&category_id) {
            return false;
        }
        self.beer_categories.link(beer_id, category_id);
        true
    }

    /// Removes the beer/category link from both sides.
    ///
    /// Returns false when either record is unknown.
    pub fn remove_category(&mut self, beer_id: Uuid, category_id: Uuid) -> bool {
        if !self.beers.contains_key(&beer_id) || !self.categories.contains_key(&category_id) {
            return false;
        }
        self.beer_categories.unlink(beer_id, category_id);
        true
    }

    /// Categories of a beer ordered by description.
    pub fn categories_of(&self, beer_id: &Uuid) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .beer_categories
            .rights_of(beer_id)
            .iter()
            .filter_map(|id| self.categories.get(id).cloned())
            .collect();
        categories.sort_by(|a, b| a.description.cmp(&b.description).then(a.id.cmp(&b.id)));
        categories
    }

    /// Beers of a category ordered by name.
    pub fn beers_of(&self, category_id: &Uuid) -> Vec<Beer> {
        let mut beers: Vec<Beer> = self
            .beer_categories
            .lefts_of(category_id)
            .iter()
            .filter_map(|id| self.beers.get(id).cloned())
            .collect();
        beers.sort_by(|a, b| a.beer_name.cmp(&b.beer_name).then(a.id.cmp(&b.id)));
        beers
    }

    /// Assigns the order's customer and registers the order with that customer,
    /// removing it from any previous customer.
    pub fn set_customer(&mut self, order_id: Uuid, customer_id: Uuid) {
        self.customer_orders.set_parent(order_id, customer_id);
    }

    /// Links an order and its shipment in both directions.
    pub fn set_beer_order_shipment(&mut self, order_id: Uuid, shipment_id: Uuid) {
        self.order_shipment.link(order_id, shipment_id);
    }

    /// Stores a line and links it to its order and beer.
    pub fn add_line(&mut self, order_id: Uuid, beer_id: Uuid, line: LineRecord) {
        let line_id = line.id;
        self.lines.insert(line_id, line);
        self.order_lines.set_parent(line_id, order_id);
        self.beer_lines.set_parent(line_id, beer_id);
    }

    /// Points an existing line at another beer.
    pub fn set_line_beer(&mut self, line_id: Uuid, beer_id: Uuid) {
        self.beer_lines.set_parent(line_id, beer_id);
    }

    /// Removes a line and its links.
    pub fn remove_line(&mut self, line_id: &Uuid) {
        self.lines.remove(line_id);
        self.order_lines.remove_child(line_id);
        self.beer_lines.remove_child(line_id);
    }

    pub fn line_ids_of(&self, order_id: &Uuid) -> Vec<Uuid> {
        self.order_lines.children_of(order_id)
    }

    pub fn shipment_id_of(&self, order_id: &Uuid) -> Option<Uuid> {
        self.order_shipment.right_of(order_id)
    }

    pub fn customer_of(&self, order_id: &Uuid) -> Option<Uuid> {
        self.customer_orders.parent_of(order_id)
    }

    pub fn customer_has_orders(&self, customer_id: &Uuid) -> bool {
        self.customer_orders.has_children(customer_id)
    }

    pub fn beer_has_lines(&self, beer_id: &Uuid) -> bool {
        self.beer_lines.has_children(beer_id)
    }

    /// Builds the full order view from the record and its links.
    pub fn order(&self, order_id: &Uuid) -> Option<BeerOrder> {
        let record = self.orders.get(order_id)?;
        let customer_id = self.customer_of(order_id)?;

        let mut lines: Vec<BeerOrderLine> = self
            .line_ids_of(order_id)
            .iter()
            .filter_map(|line_id| {
                let line = self.lines.get(line_id)?;
                let beer_id = self.beer_lines.parent_of(line_id)?;
                Some(BeerOrderLine {
                    id: line.id,
                    version: line.version,
                    beer_id,
                    order_quantity: line.order_quantity,
                    quantity_allocated: line.quantity_allocated,
                    created_date: line.created_date,
                    last_modified_date: line.last_modified_date,
                })
            })
            .collect();
        lines.sort_by(|a, b| a.created_date.cmp(&b.created_date).then(a.id.cmp(&b.id)));

        let shipment = self
            .shipment_id_of(order_id)
            .and_then(|shipment_id| self.shipments.get(&shipment_id).cloned());

        Some(BeerOrder {
            id: record.id,
            version: record.version,
            customer_ref: record.customer_ref.clone(),
            customer_id,
            lines,
            shipment,
            created_date: record.created_date,
            last_modified_date: record.last_modified_date,
        })
    }

    pub fn insert_beer(&mut self, params: BeerParams) -> Beer {
        let now = Utc::now();
        let beer = Beer {
            id: Uuid::new_v4(),
            version: 1,
            beer_name: params.beer_name,
            beer_style: params.beer_style,
            upc: params.upc,
            quantity_on_hand: params.quantity_on_hand,
            price: params.price,
            created_date: now,
            updated_date: now,
        };
        self.beers.insert(beer.id, beer.clone());
        beer
    }

    pub fn insert_customer(&mut self, params: CustomerParams) -> Customer {
        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            version: 1,
            name: params.name,
            email: params.email,
            created_date: now,
            updated_date: now,
        };
        self.customers.insert(customer.id, customer.clone());
        customer
    }

    /// Removes a beer and its category links.
    pub fn remove_beer(&mut self, beer_id: &Uuid) -> bool {
        if self.beers.remove(beer_id).is_none() {
            return false;
        }
        self.beer_categories.remove_left(beer_id);
        true
    }

    /// Removes a category and its beer links.
    pub fn remove_category_record(&mut self, category_id: &Uuid) -> bool {
        if self.categories.remove(category_id).is_none() {
            return false;
        }
        self.beer_categories.remove_right(category_id);
        true
    }

    /// Removes an order with its shipment, lines and customer link.
    pub fn remove_order(&mut self, order_id: &Uuid) -> bool {
        if self.orders.remove(order_id).is_none() {
            return false;
        }
        if let Some(shipment_id) = self.order_shipment.remove_left(order_id) {
            self.shipments.remove(&shipment_id);
        }
        for line_id in self.order_lines.remove_parent(order_id) {
            self.lines.remove(&line_id);
            self.beer_lines.remove_child(&line_id);
        }
        self.customer_orders.remove_child(order_id);
        true
    }
}

/// Shared handle to the in-memory graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    graph: Arc<RwLock<Graph>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the sample beers and customers.
    pub fn seeded() -> Self {
        let mut graph = Graph::default();
        for params in seed::sample_beers() {
            graph.insert_beer(params);
        }
        for params in seed::sample_customers() {
            graph.insert_customer(params);
        }

        Self {
            graph: Arc::new(RwLock::new(graph)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Graph> {
        self.graph.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Graph> {
        self.graph.write().await
    }
}
