//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure`. Mock implementations are auto-generated via
//! `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`CatalogRepository`] - Read-only access to movies, venues, showtimes,
//!   comments and credits

pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
