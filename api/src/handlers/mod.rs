//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod products;

pub use products::{
    adjust_stock, create_product, delete_product, get_product, list_products, replace_product,
};
