//! Repository doubles
//!
//! Implementations of `ProductRepository` with fixed behaviour.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Product Repository
// ============================================================================

/// Every call fails as if the database were unreachable
pub struct FailingProductRepository;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn create(&self, _product: &NewProduct) -> Result<Product, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _product: &Product) -> Result<Product, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, DomainError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: ProductId) -> Result<bool, DomainError> {
        Err(unavailable())
    }
}

// ============================================================================
// Counting Product Repository
// ============================================================================

/// Empty store that records how many writes were attempted
#[derive(Default)]
pub struct CountingProductRepository {
    writes: AtomicUsize,
}

impl CountingProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for CountingProductRepository {
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(Product {
            id: ProductId(1),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        })
    }

    async fn update(&self, product: &Product) -> Result<Product, DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(product.clone())
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, DomainError> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(Vec::new())
    }

    async fn delete_by_id(&self, _id: ProductId) -> Result<bool, DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }
}
