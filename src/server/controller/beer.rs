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
        beer::{BeerDto, BeerListParams},
        category::CategoryDto,
    },
    server::{
        error::AppError,
        model::{
            beer::{Beer, BeerFilter},
            category::Category,
            page::PageRequest,
        },
        state::AppState,
        util::{
            json::JsonBody,
            validate::{validate_beer, validate_beer_patch},
        },
    },
};

/// Tag for grouping beer endpoints in OpenAPI documentation
pub static BEER_TAG: &str = "beer";

pub const BEER_PATH: &str = "/api/v1/beer";
pub const BEER_PATH_ID: &str = "/api/v1/beer/{beer_id}";
pub const BEER_CATEGORY_PATH: &str = "/api/v1/beer/{beer_id}/category";
pub const BEER_CATEGORY_PATH_ID: &str = "/api/v1/beer/{beer_id}/category/{category_id}";

fn beer_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Beer {} not found", id))
}

/// List beers.
///
/// Returns a page of beers ordered by name. The name filter matches any beer whose
/// name contains the given text, ignoring case; the style filter matches exactly.
/// With `showInventory=false` the `quantityOnHand` field is left out of every beer.
///
/// # Arguments
/// - `state` - Application state containing the beer service
/// - `params` - Filters and 1-based paging
///
/// # Returns
/// - `200 OK` - Page of beers
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beer",
    tag = BEER_TAG,
    params(BeerListParams),
    responses(
        (status = 200, description = "Page of beers", body = PageDto<BeerDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_beers(
    State(state): State<AppState>,
    Query(params): Query<BeerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BeerFilter {
        beer_name: params.beer_name.filter(|name| !name.trim().is_empty()),
        beer_style: params.beer_style.map(Into::into),
        show_inventory: params.show_inventory.unwrap_or(true),
    };
    let page = PageRequest::new(params.page_number, params.page_size);

    let beers = state.beers.list_beers(filter, page).await?;

    Ok((StatusCode::OK, Json(beers.into_dto(Beer::into_dto))))
}

/// Create a beer.
///
/// Name, style, UPC and price are required; name is limited to 50 characters and
/// UPC to 255. The new beer starts at version 1.
///
/// # Returns
/// - `201 Created` - Beer created, `Location` points at it
/// - `400 Bad Request` - Field violations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/beer",
    tag = BEER_TAG,
    request_body = BeerDto,
    responses(
        (status = 201, description = "Beer created", body = BeerDto,
            headers(("Location" = String, description = "URL of the new beer"))),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_beer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_beer(&payload)?;

    let beer = state.beers.save_new_beer(params).await?;

    let location = format!("{}/{}", BEER_PATH, beer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(beer.into_dto()),
    ))
}

/// Get a beer by ID.
///
/// # Returns
/// - `200 OK` - Beer
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No beer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beer/{beer_id}",
    tag = BEER_TAG,
    params(("beer_id" = Uuid, Path, description = "Beer ID")),
    responses(
        (status = 200, description = "Beer", body = BeerDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let beer = state
        .beers
        .get_beer_by_id(beer_id)
        .await?
        .ok_or_else(|| beer_not_found(beer_id))?;

    Ok((StatusCode::OK, Json(beer.into_dto())))
}

/// Replace a beer.
///
/// Validated like creation. When the body carries a `version` it must match the
/// stored one.
///
/// # Returns
/// - `204 No Content` - Beer updated
/// - `400 Bad Request` - Field violations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No beer with this ID
/// - `409 Conflict` - Stale version
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/beer/{beer_id}",
    tag = BEER_TAG,
    params(("beer_id" = Uuid, Path, description = "Beer ID")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Beer updated"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
    JsonBody(payload): JsonBody<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_beer(&payload)?;

    state
        .beers
        .update_beer_by_id(beer_id, params)
        .await?
        .ok_or_else(|| beer_not_found(beer_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Partially update a beer.
///
/// Only supplied, non-blank fields are copied onto the stored beer.
///
/// # Returns
/// - `204 No Content` - Beer patched
/// - `400 Bad Request` - Supplied field too long
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No beer with this ID
/// - `409 Conflict` - Stale version
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/beer/{beer_id}",
    tag = BEER_TAG,
    params(("beer_id" = Uuid, Path, description = "Beer ID")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Beer patched"),
        (status = 400, description = "Field violations", body = Vec<FieldErrorDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
    JsonBody(payload): JsonBody<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = validate_beer_patch(&payload)?;

    state
        .beers
        .patch_beer_by_id(beer_id, patch)
        .await?
        .ok_or_else(|| beer_not_found(beer_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a beer.
///
/// Category links are removed with the beer. Beers still referenced by order
/// lines cannot be deleted.
///
/// # Returns
/// - `204 No Content` - Beer deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No beer with this ID
/// - `409 Conflict` - Beer is referenced by order lines
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/beer/{beer_id}",
    tag = BEER_TAG,
    params(("beer_id" = Uuid, Path, description = "Beer ID")),
    responses(
        (status = 204, description = "Beer deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 409, description = "Beer is referenced by order lines", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !state.beers.delete_beer_by_id(beer_id).await? {
        return Err(beer_not_found(beer_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the categories of a beer.
///
/// # Returns
/// - `200 OK` - Categories ordered by description
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No beer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/beer/{beer_id}/category",
    tag = BEER_TAG,
    params(("beer_id" = Uuid, Path, description = "Beer ID")),
    responses(
        (status = 200, description = "Categories of the beer", body = Vec<CategoryDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_beer_categories(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state
        .beers
        .list_categories(beer_id)
        .await?
        .ok_or_else(|| beer_not_found(beer_id))?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Add a category to a beer.
///
/// Linking an already linked category is a no-op.
///
/// # Returns
/// - `204 No Content` - Category linked
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Beer or category not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/beer/{beer_id}/category/{category_id}",
    tag = BEER_TAG,
    params(
        ("beer_id" = Uuid, Path, description = "Beer ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category linked"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_beer_category(
    State(state): State<AppState>,
    Path((beer_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.beers.add_category(beer_id, category_id).await? {
        return Err(AppError::NotFound(format!(
            "Beer {} or category {} not found",
            beer_id, category_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a category from a beer.
///
/// # Returns
/// - `204 No Content` - Category unlinked
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Beer or category not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/beer/{beer_id}/category/{category_id}",
    tag = BEER_TAG,
    params(
        ("beer_id" = Uuid, Path, description = "Beer ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category unlinked"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Beer or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_beer_category(
    State(state): State<AppState>,
    Path((beer_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.beers.remove_category(beer_id, category_id).await? {
        return Err(AppError::NotFound(format!(
            "Beer {} or category {} not found",
            beer_id, category_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
