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
        category::PageParams,
        customer::CustomerDto,
    },
    server::{
        error::AppError,
        model::{customer::Customer, page::PageRequest},
        state::AppState,
        util::{
            json::JsonBody,
            validate::{validate_customer, validate_customer_patch},
        },
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

pub const CUSTOMER_PATH: &str = "/api/v1/customer";
pub const CUSTOMER_PATH_ID: &str = "/api/v1/customer/{customer_id}";

fn customer_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}

/// List customers ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/customer",
    tag = CUSTOMER_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of customers", body = PageDto<CustomerDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(params.page_number, params.page_size);

    let customers = state.customers.list_customers(page).await?;

    Ok((StatusCode::OK, Json(customers.into_dto(Customer::into_dto))))
}

/// Create a customer.
///
/// The name is required and limited to 255 characters, as is the optional email.
///
/// # Returns
/// - `201 Created` - Customer created, `Location` points at it
/// - `400 Bad Request` - Field violations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/customer",
    tag = CUSTOMER_TAG,
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto,
            headers(("Location" = String, description = "URL of the new customer"))),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_customer(&payload)?;

    let customer = state.customers.save_new_customer(params).await?;

    let location = format!("{}/{}", CUSTOMER_PATH, customer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/customer/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state
        .customers
        .get_customer_by_id(customer_id)
        .await?
        .ok_or_else(|| customer_not_found(customer_id))?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/customer/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = Uuid, Path, description = "Customer ID")),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    JsonBody(payload): JsonBody<CustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_customer(&payload)?;

    state
        .customers
        .update_customer_by_id(customer_id, params)
        .await?
        .ok_or_else(|| customer_not_found(customer_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/v1/customer/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = Uuid, Path, description = "Customer ID")),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Customer patched"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    JsonBody(payload): JsonBody<CustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = validate_customer_patch(&payload)?;

    state
        .customers
        .patch_customer_by_id(customer_id, patch)
        .await?
        .ok_or_else(|| customer_not_found(customer_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a customer.
///
/// Customers that still own orders cannot be deleted.
///
/// # Returns
/// - `204 No Content` - Customer deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No customer with this ID
/// - `409 Conflict` - Customer still owns orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/customer/{customer_id}",
    tag = CUSTOMER_TAG,
    params(("customer_id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Customer still owns orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.customers.delete_customer_by_id(customer_id).await? {
        return Err(customer_not_found(customer_id));
    }

    Ok(StatusCode::NO_CONTENT)
}
