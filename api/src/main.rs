//! Product API Server
//!
//! A CRUD service for catalog products and their stock levels.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, patch},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, InMemoryProductRepository, PostgresProductRepository};
use app::ProductService;
use config::Config;
use domain::ports::ProductRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<dyn ProductRepository>>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(products)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Product catalog
        .route(
            "/api/produtos",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/produtos/:id",
            get(handlers::get_product)
                .put(handlers::replace_product)
                .delete(handlers::delete_product),
        )
        .route("/api/produtos/:id/:delta", patch(handlers::adjust_stock))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting product API...");

    // Load configuration
    let config = Config::from_env();

    // Pick the product store
    let products: Arc<dyn ProductRepository> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            if config.auto_migrate {
                ensure_schema(&db)
                    .await
                    .context("Failed to create database schema")?;
            }

            Arc::new(PostgresProductRepository::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory only");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    let app = build_router(AppState::new(products));

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
