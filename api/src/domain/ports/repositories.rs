//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::error::DomainError;

/// Repository for Product entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, letting the store assign its id
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Overwrite every field of an existing product
    async fn update(&self, product: &Product) -> Result<Product, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// All stored products, ordered by ID
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Delete a product by ID. Returns `false` if no row matched.
    async fn delete_by_id(&self, id: ProductId) -> Result<bool, DomainError>;
}
