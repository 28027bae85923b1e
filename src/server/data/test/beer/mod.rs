use crate::server::{
    data::beer::BeerRepository,
    model::{
        beer::{BeerFilter, BeerParams, BeerPatch},
        page::PageRequest,
    },
};
use entity::sea_orm_active_enums::BeerStyle;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod patch;
mod update;

fn params(beer_name: &str) -> BeerParams {
    BeerParams {
        version: None,
        beer_name: beer_name.to_string(),
        beer_style: BeerStyle::PaleAle,
        upc: "23423424234".to_string(),
        quantity_on_hand: Some(10),
        price: Decimal::new(1199, 2),
    }
}
