use crate::server::{
    data::customer::CustomerRepository,
    model::{
        customer::{CustomerParams, CustomerPatch},
        page::PageRequest,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_paginated;
mod patch;
mod update;

fn params(name: &str) -> CustomerParams {
    CustomerParams {
        version: None,
        name: name.to_string(),
        email: Some("someone@example.com".to_string()),
    }
}
