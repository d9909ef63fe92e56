//! Test utilities
//!
//! Fixtures and hand-written repository doubles for unit testing.
//!
//! Most service tests run against `InMemoryProductRepository`. The doubles
//! here cover what it cannot: a store that always fails and one that counts
//! writes. Call-level expectations use mockall's `MockProductRepository`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
