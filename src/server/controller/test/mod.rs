use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use chrono::Utc;
use entity::sea_orm_active_enums::BeerStyle;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    model::{beer::Beer, category::Category, customer::Customer, order::BeerOrder},
    router::router,
    service::{
        beer::MockBeerService, category::MockCategoryService, customer::MockCustomerService,
        jwt::JwtVerifier, order::MockBeerOrderService,
    },
    state::AppState,
};
use test_utils::token::{mint_hs256, TEST_ISSUER, TEST_SECRET};


/// Service mocks wired into a router. Methods without expectations panic when called.
#[derive(Default)]
struct Mocks {
    beers: MockBeerService,
    categories: MockCategoryService,
    customers: MockCustomerService,
    orders: MockBeerOrderService,
}

impl Mocks {
    fn into_router(self) -> Router {
        let jwt = Arc::new(JwtVerifier::hmac(
            TEST_SECRET.as_bytes(),
            Some(TEST_ISSUER.to_string()),
        ));

        router(AppState::new(
            Arc::new(self.beers),
            Arc::new(self.categories),
            Arc::new(self.customers),
            Arc::new(self.orders),
            jwt,
        ))
    }
}

fn bearer() -> String {
    format!("Bearer {}", mint_hs256(TEST_SECRET, "brewer", TEST_ISSUER).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, bearer())
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer())
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_beer(id: Uuid) -> Beer {
    let now = Utc::now();
    Beer {
        id,
        version: 1,
        beer_name: "My Beer".to_string(),
        beer_style: BeerStyle::PaleAle,
        upc: "23423424234".to_string(),
        quantity_on_hand: Some(10),
        price: Decimal::new(1199, 2),
        created_date: now,
        updated_date: now,
    }
}

fn sample_category(id: Uuid) -> Category {
    let now = Utc::now();
    Category {
        id,
        version: 1,
        description: "Ales".to_string(),
        created_date: now,
        last_modified_date: now,
    }
}

fn sample_customer(id: Uuid) -> Customer {
    let now = Utc::now();
    Customer {
        id,
        version: 1,
        name: "Alice".to_string(),
        email: Some("alice@example.com".to_string()),
        created_date: now,
        updated_date: now,
    }
}

fn sample_order(id: Uuid, customer_id: Uuid) -> BeerOrder {
    let now = Utc::now();
    BeerOrder {
        id,
        version: 1,
        customer_ref: Some("ref-1".to_string()),
        customer_id,
        lines: Vec::new(),
        shipment: None,
        created_date: now,
        last_modified_date: now,
    }
}
