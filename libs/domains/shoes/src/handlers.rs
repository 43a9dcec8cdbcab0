use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{UuidPath, ValidatedJson, ValidatedQuery};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ShoeResult;
use crate::models::{CreateShoe, Shoe, ShoeFilter, UpdateShoe};
use crate::repository::ShoeRepository;
use crate::service::ShoeService;

/// OpenAPI documentation for the shoe catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_shoes,
        create_shoe,
        get_shoe,
        update_shoe,
        delete_shoe,
        list_brands,
        list_categories,
    ),
    components(
        schemas(
            Shoe,
            CreateShoe,
            UpdateShoe,
            ShoeFilter,
            ShoeListResponse,
            ShoeResponse,
            ValueListResponse,
            StatusResponse,
            axum_helpers::ErrorBody,
        )
    ),
    tags(
        (name = "Shoes", description = "Shoe catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Listing envelope, echoing which filters were applied
#[derive(Serialize, ToSchema)]
pub struct ShoeListResponse {
    pub success: bool,
    pub data: Vec<Shoe>,
    pub count: usize,
    pub filters: Vec<String>,
}

/// Single-record envelope
#[derive(Serialize, ToSchema)]
pub struct ShoeResponse {
    pub success: bool,
    pub data: Shoe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for the distinct brand/category listings
#[derive(Serialize, ToSchema)]
pub struct ValueListResponse {
    pub success: bool,
    pub data: Vec<String>,
    pub count: usize,
}

/// Envelope for data-free outcomes
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// Create the shoes router with all HTTP endpoints
pub fn router<R: ShoeRepository + 'static>(service: ShoeService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_shoes).post(create_shoe))
        .route("/brands", get(list_brands))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_shoe).put(update_shoe).delete(delete_shoe))
        .with_state(shared_service)
}

/// List shoes with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Shoes",
    params(ShoeFilter),
    responses(
        (status = 200, description = "Matching shoes with the applied filter names", body = ShoeListResponse),
        (status = 400, description = "Malformed filter value", body = axum_helpers::ErrorBody),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn list_shoes<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<ShoeFilter>,
) -> ShoeResult<Json<ShoeListResponse>> {
    let filters = filter.applied();
    let shoes = service.list_shoes(filter).await?;

    Ok(Json(ShoeListResponse {
        success: true,
        count: shoes.len(),
        data: shoes,
        filters,
    }))
}

/// Create a new shoe
#[utoipa::path(
    post,
    path = "",
    tag = "Shoes",
    request_body = CreateShoe,
    responses(
        (status = 201, description = "Shoe created successfully", body = ShoeResponse),
        (status = 400, description = "Validation failed", body = axum_helpers::ErrorBody),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn create_shoe<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateShoe>,
) -> ShoeResult<impl IntoResponse> {
    let shoe = service.create_shoe(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShoeResponse {
            success: true,
            data: shoe,
            message: Some("Shoe created successfully".to_string()),
        }),
    ))
}

/// Get a shoe by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Shoes",
    params(
        ("id" = Uuid, Path, description = "Shoe ID")
    ),
    responses(
        (status = 200, description = "Shoe found", body = ShoeResponse),
        (status = 400, description = "Malformed id", body = axum_helpers::ErrorBody),
        (status = 404, description = "Shoe not found", body = axum_helpers::ErrorBody),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn get_shoe<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
    UuidPath(id): UuidPath,
) -> ShoeResult<Json<ShoeResponse>> {
    let shoe = service.get_shoe(id).await?;

    Ok(Json(ShoeResponse {
        success: true,
        data: shoe,
        message: None,
    }))
}

/// Update a shoe
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Shoes",
    params(
        ("id" = Uuid, Path, description = "Shoe ID")
    ),
    request_body = UpdateShoe,
    responses(
        (status = 200, description = "Shoe updated successfully", body = ShoeResponse),
        (status = 400, description = "Validation failed or id conflict", body = axum_helpers::ErrorBody),
        (status = 404, description = "Shoe not found", body = axum_helpers::ErrorBody),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn update_shoe<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateShoe>,
) -> ShoeResult<Json<ShoeResponse>> {
    let shoe = service.update_shoe(id, input).await?;

    Ok(Json(ShoeResponse {
        success: true,
        data: shoe,
        message: Some("Shoe updated successfully".to_string()),
    }))
}

/// Delete a shoe
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Shoes",
    params(
        ("id" = Uuid, Path, description = "Shoe ID")
    ),
    responses(
        (status = 200, description = "Shoe deleted successfully", body = StatusResponse),
        (status = 400, description = "Malformed id", body = axum_helpers::ErrorBody),
        (status = 404, description = "Shoe not found", body = axum_helpers::ErrorBody),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn delete_shoe<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
    UuidPath(id): UuidPath,
) -> ShoeResult<Json<StatusResponse>> {
    service.delete_shoe(id).await?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Shoe deleted successfully".to_string(),
    }))
}

/// List the distinct brands in the catalog
#[utoipa::path(
    get,
    path = "/brands",
    tag = "Shoes",
    responses(
        (status = 200, description = "Distinct brand values", body = ValueListResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn list_brands<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
) -> ShoeResult<Json<ValueListResponse>> {
    let brands = service.list_brands().await?;

    Ok(Json(ValueListResponse {
        success: true,
        count: brands.len(),
        data: brands,
    }))
}

/// List the distinct categories in the catalog
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Shoes",
    responses(
        (status = 200, description = "Distinct category values", body = ValueListResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorBody)
    )
)]
async fn list_categories<R: ShoeRepository>(
    State(service): State<Arc<ShoeService<R>>>,
) -> ShoeResult<Json<ValueListResponse>> {
    let categories = service.list_categories().await?;

    Ok(Json(ValueListResponse {
        success: true,
        count: categories.len(),
        data: categories,
    }))
}
