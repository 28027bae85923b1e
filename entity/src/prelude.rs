pub use super::beer::Entity as Beer;
pub use super::beer_category::Entity as BeerCategory;
pub use super::beer_order::Entity as BeerOrder;
pub use super::beer_order_line::Entity as BeerOrderLine;
pub use super::beer_order_shipment::Entity as BeerOrderShipment;
pub use super::category::Entity as Category;
pub use super::customer::Entity as Customer;
