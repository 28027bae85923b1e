use crate::server::{
    data::order::BeerOrderRepository,
    model::{
        order::{
            BeerOrderFilter, CreateBeerOrderParams, NewOrderLine, OrderLineParams,
            PatchBeerOrderParams, UpdateBeerOrderParams,
        },
        page::PageRequest,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_paginated;
mod patch;
mod update;

fn uuid(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap()
}
