//! Domain layer containing the mock cinema entities and their contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Catalog records and submission models
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Time source for mock identifiers and timestamps
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Mock behaviour lives in [`crate::application::services`].

pub mod clock;
pub mod entities;
pub mod repositories;
