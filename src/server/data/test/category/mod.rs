use crate::server::{
    data::category::CategoryRepository,
    model::{
        category::{CategoryParams, CategoryPatch},
        page::PageRequest,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_paginated;
mod update;

fn params(description: &str) -> CategoryParams {
    CategoryParams {
        version: None,
        description: description.to_string(),
    }
}
