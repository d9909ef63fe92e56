//! Product handlers
//!
//! Endpoints for the product catalog under `/api/produtos`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Product, ProductInput};
use crate::error::{ApiMessage, AppError};
use crate::AppState;

/// Request body for creating or replacing a product
///
/// Missing text fields are treated as empty and a missing quantity as zero,
/// so they fail or pass validation rather than deserialization. Any `id` in
/// the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
    #[serde(default, rename = "preco")]
    pub price: Option<Decimal>,
    #[serde(default, rename = "quantidadeEstoque")]
    pub stock_quantity: Option<i32>,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        ProductInput {
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            price: request.price,
            stock_quantity: request.stock_quantity.unwrap_or_default(),
        }
    }
}

/// Response body for a stored product
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.0,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
        }
    }
}

fn read_body(body: Result<Json<ProductRequest>, JsonRejection>) -> Result<ProductInput, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;
    Ok(request.into())
}

/// POST /api/produtos
///
/// Create a product. Responds 201 with the confirmation envelope.
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    let input = read_body(body)?;
    let confirmation = state.product_service.create(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new(confirmation.message, 201)),
    ))
}

/// GET /api/produtos/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_by_id(&id).await?;

    Ok(Json(product.into()))
}

/// GET /api/produtos
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.list_all().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// PUT /api/produtos/:id
///
/// Replace a product's fields. The submitted quantity is added to the
/// current stock. Responds 202 while the envelope reports 204.
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    let input = read_body(body)?;
    let confirmation = state.product_service.replace(&id, &input).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiMessage::new(confirmation.message, 204)),
    ))
}

/// PATCH /api/produtos/:id/:delta
///
/// Add a signed delta to a product's stock.
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path((id, delta)): Path<(String, String)>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    let confirmation = state.product_service.adjust_stock(&id, &delta).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiMessage::new(confirmation.message, 204)),
    ))
}

/// DELETE /api/produtos/:id
///
/// The envelope is attached, but a 204 response carries no body on the wire.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError> {
    let confirmation = state.product_service.delete(&id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        Json(ApiMessage::new(confirmation.message, 204)),
    ))
}
