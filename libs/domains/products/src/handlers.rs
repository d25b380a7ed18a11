//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedRequest,
    errors::responses::{
        BadRequestIdResponse, BadRequestInvalidJsonResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    AvailabilityPatch, CreateProduct, DataResponse, MessageResponse, Product, ProductSummary,
};
use crate::repository::ProductRepository;
use crate::rules::{CreateProductRules, PatchAvailabilityRules, ProductIdRules, UpdateProductRules};
use crate::service::ProductService;

pub const PRODUCT_UPDATED: &str = "Product updated successfully.";
pub const AVAILABILITY_UPDATED: &str = "Product availability updated successfully.";
pub const PRODUCT_REMOVED: &str = "Product removed successfully.";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        patch_availability,
        delete_product,
    ),
    components(
        schemas(Product, ProductSummary, CreateProduct, AvailabilityPatch, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestInvalidJsonResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List the most expensive products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "At most 3 products, price descending", body = DataResponse<Vec<ProductSummary>>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<DataResponse<Vec<ProductSummary>>>> {
    let products = service.list_products().await?;
    Ok(Json(DataResponse::new(products)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(input): ValidatedRequest<CreateProductRules>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = DataResponse<Product>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(id): ValidatedRequest<ProductIdRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(DataResponse::new(product)))
}

/// Replace name and price of a product; availability only when supplied
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest((id, input)): ValidatedRequest<UpdateProductRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(DataResponse::new(product).with_message(PRODUCT_UPDATED)))
}

/// Set availability, or flip it when the body has no `isAvailable`
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = AvailabilityPatch, description = "Omit `isAvailable` to flip the current value"),
    responses(
        (status = 200, description = "Availability updated", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest((id, is_available)): ValidatedRequest<PatchAvailabilityRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.set_availability(id, is_available).await?;
    Ok(Json(DataResponse::new(product).with_message(AVAILABILITY_UPDATED)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(id): ValidatedRequest<ProductIdRules>,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(id).await?;
    Ok(Json(MessageResponse::new(PRODUCT_REMOVED)))
}
