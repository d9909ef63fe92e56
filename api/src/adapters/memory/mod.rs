//! In-memory adapters
//!
//! Process-local implementations of repository traits, used when no
//! database is configured.

pub mod product_repo;

pub use product_repo::InMemoryProductRepository;
