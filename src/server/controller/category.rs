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
        beer::BeerDto,
        category::{CategoryDto, PageParams},
    },
    server::{
        error::AppError,
        model::{beer::Beer, category::Category, page::PageRequest},
        state::AppState,
        util::{
            json::JsonBody,
            validate::{validate_category, validate_category_patch},
        },
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

pub const CATEGORY_PATH: &str = "/api/v1/category";
pub const CATEGORY_PATH_ID: &str = "/api/v1/category/{category_id}";
pub const CATEGORY_BEER_PATH: &str = "/api/v1/category/{category_id}/beer";

fn category_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

/// List categories.
///
/// Returns a page of categories ordered by description.
///
/// # Returns
/// - `200 OK` - Page of categories
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/category",
    tag = CATEGORY_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of categories", body = PageDto<CategoryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(params.page_number, params.page_size);

    let categories = state.categories.list_categories(page).await?;

    Ok((StatusCode::OK, Json(categories.into_dto(Category::into_dto))))
}

/// Create a category.
///
/// # Returns
/// - `201 Created` - Category created, `Location` points at it
/// - `400 Bad Request` - Description missing or too long
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/category",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto,
            headers(("Location" = String, description = "URL of the new category"))),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_category(&payload)?;

    let category = state.categories.save_new_category(params).await?;

    let location = format!("{}/{}", CATEGORY_PATH, category.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/category/{category_id}",
    tag = CATEGORY_TAG,
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .categories
        .get_category_by_id(category_id)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/category/{category_id}",
    tag = CATEGORY_TAG,
    params(("category_id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryDto,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_category_by_id(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
    JsonBody(payload): JsonBody<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_category(&payload)?;

    state
        .categories
        .update_category_by_id(category_id, params)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/v1/category/{category_id}",
    tag = CATEGORY_TAG,
    params(("category_id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryDto,
    responses(
        (status = 204, description = "Category patched"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_category_by_id(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
    JsonBody(payload): JsonBody<CategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = validate_category_patch(&payload)?;

    state
        .categories
        .patch_category_by_id(category_id, patch)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category.
///
/// The category is unlinked from every beer first; the beers themselves stay.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/category/{category_id}",
    tag = CATEGORY_TAG,
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_category_by_id(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.categories.delete_category_by_id(category_id).await? {
        return Err(category_not_found(category_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the beers in a category.
///
/// # Returns
/// - `200 OK` - Beers ordered by name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/category/{category_id}/beer",
    tag = CATEGORY_TAG,
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Beers in the category", body = Vec<BeerDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_category_beers(
    State(state): State<AppState>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let beers = state
        .categories
        .list_beers(category_id)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;

    let beers: Vec<BeerDto> = beers.into_iter().map(Beer::into_dto).collect();

    Ok((StatusCode::OK, Json(beers)))
}
