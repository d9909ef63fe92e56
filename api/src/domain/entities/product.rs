//! Product domain entity
//!
//! A catalog record with a price and an on-hand stock quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Fields checked when a product is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
    Price,
    StockQuantity,
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductField::Name => write!(f, "nome"),
            ProductField::Description => write!(f, "descrição"),
            ProductField::Price => write!(f, "Preço"),
            ProductField::StockQuantity => write!(f, "quantidade"),
        }
    }
}

/// A persisted product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

impl Product {
    /// Stock level after adding `delta`, or `None` if the result would be
    /// negative or does not fit the stored integer width.
    pub fn stock_after(&self, delta: i32) -> Option<i32> {
        self.stock_quantity
            .checked_add(delta)
            .filter(|quantity| *quantity >= 0)
    }
}

/// Data needed to create a new product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

/// Unvalidated product data as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub stock_quantity: i32,
}

impl ProductInput {
    /// Check every field in declaration order, reporting the first one that
    /// fails.
    ///
    /// Price is compared on its integer part only, so `0.99` is rejected
    /// along with zero and negative values.
    pub fn validate(&self) -> Result<NewProduct, ProductField> {
        if self.name.trim().is_empty() {
            return Err(ProductField::Name);
        }
        if self.description.trim().is_empty() {
            return Err(ProductField::Description);
        }
        let price = match self.price {
            Some(price) if price.trunc() > Decimal::ZERO => price,
            _ => return Err(ProductField::Price),
        };
        if self.stock_quantity < 0 {
            return Err(ProductField::StockQuantity);
        }

        Ok(NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            stock_quantity: self.stock_quantity,
        })
    }
}
