//! Fixture-backed catalog.
//!
//! The catalog document (`fixtures/catalog.json`) is compiled into the binary
//! and can be replaced at start-up with `FIXTURES_PATH`.

pub mod document;
pub mod fixture_catalog;

pub use fixture_catalog::{FixtureCatalog, FixtureSummary};
