//! In-memory adapter for ProductRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

#[derive(Debug)]
struct Store {
    next_id: i64,
    products: BTreeMap<ProductId, Product>,
}

/// Map-backed implementation of ProductRepository
///
/// Ids are assigned sequentially from 1. Every call takes the lock on its
/// own, so a read followed by a write from the service is not atomic.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                products: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product, keeping its id
    #[cfg(test)]
    pub fn with_product(mut self, product: Product) -> Self {
        let store = self.store.get_mut();
        store.next_id = store.next_id.max(product.id.0 + 1);
        store.products.insert(product.id, product);
        self
    }

    /// Read a stored product directly, bypassing the port
    #[cfg(test)]
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.store.read().await.products.get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        let mut store = self.store.write().await;

        let id = ProductId(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("Product id space exhausted".to_string()))?;

        let product = Product {
            id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            stock_quantity: new_product.stock_quantity,
        };
        store.products.insert(id, product.clone());

        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, DomainError> {
        let mut store = self.store.write().await;

        match store.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(product.clone())
            }
            None => Err(DomainError::NotFound(format!(
                "Product {} not found",
                product.id
            ))),
        }
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.products.remove(&id).is_some())
    }
}
