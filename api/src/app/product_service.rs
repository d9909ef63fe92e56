//! Product service
//!
//! Validates product writes and applies create, replace, stock adjustment and
//! delete against a `ProductRepository`.
//!
//! Each operation does at most one read followed by one write. Nothing is
//! locked between the two, so concurrent replace/adjust calls on the same id
//! can overwrite each other's stock change (last write wins).

use std::sync::Arc;

use crate::domain::entities::{Product, ProductId, ProductInput};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub message: String,
    /// The product as stored after the write; `None` once deleted
    pub product: Option<Product>,
}

/// Service for managing products
pub struct ProductService<PR>
where
    PR: ProductRepository + ?Sized,
{
    products: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository + ?Sized,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// Create a product from caller input
    pub async fn create(&self, input: &ProductInput) -> Result<Confirmation, AppError> {
        let new_product = input.validate().inspect_err(|field| {
            tracing::debug!(%field, "Rejected product creation");
        })?;

        let product = self.products.create(&new_product).await?;
        tracing::info!(id = %product.id, name = %product.name, "Product created");

        Ok(Confirmation {
            message: format!("Produto {} criado", product.name),
            product: Some(product),
        })
    }

    /// Get a product by its textual id
    pub async fn get_by_id(&self, id: &str) -> Result<Product, AppError> {
        let id = parse_id(id)?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// List every stored product
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.find_all().await?)
    }

    /// Replace name, description and price of a product and add the incoming
    /// quantity to its current stock.
    ///
    /// Input is validated before the id is looked at.
    pub async fn replace(&self, id: &str, input: &ProductInput) -> Result<Confirmation, AppError> {
        let update = input.validate().inspect_err(|field| {
            tracing::debug!(%field, "Rejected product replacement");
        })?;

        let id = parse_id(id)?;
        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let stock_quantity = product
            .stock_after(update.stock_quantity)
            .ok_or(AppError::NegativeStock)?;

        product.name = update.name;
        product.description = update.description;
        product.price = update.price;
        product.stock_quantity = stock_quantity;

        let product = self.products.update(&product).await?;
        tracing::info!(
            id = %product.id,
            stock_quantity = product.stock_quantity,
            "Product replaced"
        );

        Ok(Confirmation {
            message: format!("Produto {} Atualizado", product.name),
            product: Some(product),
        })
    }

    /// Add a signed delta to a product's stock
    pub async fn adjust_stock(&self, id: &str, delta: &str) -> Result<Confirmation, AppError> {
        let (id, delta) = match (id.parse::<ProductId>(), delta.parse::<i32>()) {
            (Ok(id), Ok(delta)) => (id, delta),
            _ => return Err(AppError::MalformedStockValues),
        };

        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        // An overflowing sum is reported as insufficient stock as well.
        product.stock_quantity = match product.stock_after(delta) {
            Some(quantity) => quantity,
            None => {
                tracing::debug!(
                    %id,
                    stock_quantity = product.stock_quantity,
                    delta,
                    "Insufficient stock"
                );
                return Err(AppError::InsufficientStock);
            }
        };

        let product = self.products.update(&product).await?;
        tracing::info!(
            id = %product.id,
            delta,
            stock_quantity = product.stock_quantity,
            "Stock adjusted"
        );

        Ok(Confirmation {
            message: format!(
                "Estoque do produto {} atualizado para {}",
                product.name, product.stock_quantity
            ),
            product: Some(product),
        })
    }

    /// Delete a product by its textual id
    pub async fn delete(&self, id: &str) -> Result<Confirmation, AppError> {
        let id = parse_id(id)?;

        if !self.products.delete_by_id(id).await? {
            return Err(AppError::IdNotFound);
        }
        tracing::info!(%id, "Product deleted");

        Ok(Confirmation {
            message: "Produto Deletado".to_string(),
            product: None,
        })
    }
}

fn parse_id(id: &str) -> Result<ProductId, AppError> {
    id.parse().map_err(|_| AppError::MalformedId)
}
