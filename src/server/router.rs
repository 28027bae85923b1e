use axum::{
    middleware::from_fn_with_state,
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{
        beer::{
            self, add_beer_category, create_beer, delete_beer_by_id, get_beer_by_id,
            list_beer_categories, list_beers, patch_beer_by_id, remove_beer_category,
            update_beer_by_id, BEER_CATEGORY_PATH, BEER_CATEGORY_PATH_ID, BEER_PATH,
            BEER_PATH_ID,
        },
        category::{
            self, create_category, delete_category_by_id, get_category_by_id,
            list_categories, list_category_beers, patch_category_by_id, update_category_by_id,
            CATEGORY_BEER_PATH, CATEGORY_PATH, CATEGORY_PATH_ID,
        },
        customer::{
            self, create_customer, delete_customer_by_id, get_customer_by_id, list_customers,
            patch_customer_by_id, update_customer_by_id, CUSTOMER_PATH, CUSTOMER_PATH_ID,
        },
        order::{
            self, create_order, delete_order_by_id, get_order_by_id, list_orders,
            patch_order_by_id, update_order_by_id, BEER_ORDER_PATH, BEER_ORDER_PATH_ID,
        },
    },
    middleware::auth::require_bearer,
    state::AppState,
};

pub const API_DOCS_PATH: &str = "/v3/api-docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Brewery API", description = "Beers, categories, customers and beer orders"),
    paths(
        beer::list_beers,
        beer::create_beer,
        beer::get_beer_by_id,
        beer::update_beer_by_id,
        beer::patch_beer_by_id,
        beer::delete_beer_by_id,
        beer::list_beer_categories,
        beer::add_beer_category,
        beer::remove_beer_category,
        category::list_categories,
        category::create_category,
        category::get_category_by_id,
        category::update_category_by_id,
        category::patch_category_by_id,
        category::delete_category_by_id,
        category::list_category_beers,
        customer::list_customers,
        customer::create_customer,
        customer::get_customer_by_id,
        customer::update_customer_by_id,
        customer::patch_customer_by_id,
        customer::delete_customer_by_id,
        order::list_orders,
        order::create_order,
        order::get_order_by_id,
        order::update_order_by_id,
        order::patch_order_by_id,
        order::delete_order_by_id,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "beer", description = "Beer catalogue and category links"),
        (name = "category", description = "Beer categories"),
        (name = "customer", description = "Customers"),
        (name = "beer-order", description = "Beer orders, lines and shipments"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by every path.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router.
///
/// Every route, the OpenAPI document included, sits behind the bearer token layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(BEER_PATH, get(list_beers).post(create_beer))
        .route(
            BEER_PATH_ID,
            get(get_beer_by_id)
                .put(update_beer_by_id)
                .patch(patch_beer_by_id)
                .delete(delete_beer_by_id),
        )
        .route(BEER_CATEGORY_PATH, get(list_beer_categories))
        .route(
            BEER_CATEGORY_PATH_ID,
            put(add_beer_category).delete(remove_beer_category),
        )
        .route(CATEGORY_PATH, get(list_categories).post(create_category))
        .route(
            CATEGORY_PATH_ID,
            get(get_category_by_id)
                .put(update_category_by_id)
                .patch(patch_category_by_id)
                .delete(delete_category_by_id),
        )
        .route(CATEGORY_BEER_PATH, get(list_category_beers))
        .route(CUSTOMER_PATH, get(list_customers).post(create_customer))
        .route(
            CUSTOMER_PATH_ID,
            get(get_customer_by_id)
                .put(update_customer_by_id)
                .patch(patch_customer_by_id)
                .delete(delete_customer_by_id),
        )
        .route(BEER_ORDER_PATH, get(list_orders).post(create_order))
        .route(
            BEER_ORDER_PATH_ID,
            get(get_order_by_id)
                .put(update_order_by_id)
                .patch(patch_order_by_id)
                .delete(delete_order_by_id),
        )
        .route(API_DOCS_PATH, get(api_docs))
        .layer(from_fn_with_state(state.clone(), require_bearer))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
