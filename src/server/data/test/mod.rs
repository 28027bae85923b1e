mod beer;
mod beer_category;
mod category;
mod customer;
mod order;
