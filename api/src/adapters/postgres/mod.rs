//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod product_repo;


use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::products;
use crate::error::DomainError;

pub use product_repo::PostgresProductRepository;

/// Create the tables backing the repositories if they do not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(products::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}
