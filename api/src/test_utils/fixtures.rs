//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;

use crate::domain::entities::{NewProduct, Product, ProductId, ProductInput};

/// A stored product with the given id and stock
pub fn test_product(id: i64, stock_quantity: i32) -> Product {
    Product {
        id: ProductId(id),
        name: "Caneta".to_string(),
        description: "Azul".to_string(),
        price: Decimal::from(100),
        stock_quantity,
    }
}

/// Valid caller input for a product
pub fn product_input() -> ProductInput {
    ProductInput {
        name: "Caneta".to_string(),
        description: "Azul".to_string(),
        price: Some(Decimal::from(100)),
        stock_quantity: 50,
    }
}

/// Already-validated data for a new product
pub fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "Azul".to_string(),
        price: Decimal::from(100),
        stock_quantity: 50,
    }
}
