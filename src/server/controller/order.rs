use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, PageDto},
        order::{
            BeerOrderCreateDto, BeerOrderDto, BeerOrderListParams, BeerOrderPatchDto,
            BeerOrderUpdateDto,
        },
    },
    server::{
        error::AppError,
        model::{
            order::{BeerOrder, BeerOrderFilter},
            page::PageRequest,
        },
        state::AppState,
        util::{
            json::JsonBody,
            validate::{validate_order_create, validate_order_patch, validate_order_update},
        },
    },
};

/// Tag for grouping beer order endpoints in OpenAPI documentation
pub static BEER_ORDER_TAG: &str = "beer-order";

pub const BEER_ORDER_PATH: &str = "/api/v1/beerorder";
pub const BEER_ORDER_PATH_ID: &str = "/api/v1/beerorder/{beer_order_id}";

fn order_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Beer order {} not found", id))
}

/// List beer orders.
///
/// Returns a page of orders ordered by creation date, each with its lines and
/// shipment. `customerId` restricts the page to the orders of one customer.
///
/// # Returns
/// - `200 OK` - Page of orders
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beerorder",
    tag = BEER_ORDER_TAG,
    params(BeerOrderListParams),
    responses(
        (status = 200, description = "Page of beer orders", body = PageDto<BeerOrderDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<BeerOrderListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BeerOrderFilter {
        customer_id: params.customer_id,
    };
    let page = PageRequest::new(params.page_number, params.page_size);

    let orders = state.orders.list_orders(filter, page).await?;

    Ok((StatusCode::OK, Json(orders.into_dto(BeerOrder::into_dto))))
}

/// Place a beer order.
///
/// The customer and every beer referenced by a line must exist. A shipment with a
/// tracking number may be supplied and is linked to the order in the same step.
///
/// # Returns
/// - `201 Created` - Order created, `Location` points at it
/// - `400 Bad Request` - Field violations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Customer or beer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/beerorder",
    tag = BEER_ORDER_TAG,
    request_body = BeerOrderCreateDto,
    responses(
        (status = 201, description = "Beer order created", body = BeerOrderDto,
            headers(("Location" = String, description = "URL of the new order"))),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer or beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BeerOrderCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_order_create(&payload)?;

    let order = state.orders.create_order(params).await?;

    let location = format!("{}/{}", BEER_ORDER_PATH, order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/beerorder/{beer_order_id}",
    tag = BEER_ORDER_TAG,
    params(("beer_order_id" = Uuid, Path, description = "Beer order ID")),
    responses(
        (status = 200, description = "Beer order", body = BeerOrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(beer_order_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = state
        .orders
        .get_order_by_id(beer_order_id)
        .await?
        .ok_or_else(|| order_not_found(beer_order_id))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Replace a beer order.
///
/// Lines carrying the ID of one of the order's lines are updated in place, other
/// lines are added and lines left out are removed. A tracking number creates or
/// updates the shipment. Unlike the other entities the updated order is returned.
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Field violations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Order, customer or beer not found
/// - `409 Conflict` - Stale version
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/beerorder/{beer_order_id}",
    tag = BEER_ORDER_TAG,
    params(("beer_order_id" = Uuid, Path, description = "Beer order ID")),
    request_body = BeerOrderUpdateDto,
    responses(
        (status = 200, description = "Beer order updated", body = BeerOrderDto),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer order, customer or beer not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_order_by_id(
    State(state): State<AppState>,
    Path(beer_order_id): Path<Uuid>,
    JsonBody(payload): JsonBody<BeerOrderUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_order_update(&payload)?;

    let order = state
        .orders
        .update_order_by_id(beer_order_id, params)
        .await?
        .ok_or_else(|| order_not_found(beer_order_id))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Partially update a beer order's customer reference and shipment tracking number.
#[utoipa::path(
    patch,
    path = "/api/v1/beerorder/{beer_order_id}",
    tag = BEER_ORDER_TAG,
    params(("beer_order_id" = Uuid, Path, description = "Beer order ID")),
    request_body = BeerOrderPatchDto,
    responses(
        (status = 204, description = "Beer order patched"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer order not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_order_by_id(
    State(state): State<AppState>,
    Path(beer_order_id): Path<Uuid>,
    JsonBody(payload): JsonBody<BeerOrderPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_order_patch(&payload)?;

    state
        .orders
        .patch_order_by_id(beer_order_id, params)
        .await?
        .ok_or_else(|| order_not_found(beer_order_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a beer order together with its lines and shipment.
#[utoipa::path(
    delete,
    path = "/api/v1/beerorder/{beer_order_id}",
    tag = BEER_ORDER_TAG,
    params(("beer_order_id" = Uuid, Path, description = "Beer order ID")),
    responses(
        (status = 204, description = "Beer order deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_order_by_id(
    State(state): State<AppState>,
    Path(beer_order_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.orders.delete_order_by_id(beer_order_id).await? {
        return Err(order_not_found(beer_order_id));
    }

    Ok(StatusCode::NO_CONTENT)
}
