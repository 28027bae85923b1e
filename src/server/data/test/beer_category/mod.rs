use crate::server::data::beer_category::BeerCategoryRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod link;
mod unlink;

fn uuid(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap()
}
