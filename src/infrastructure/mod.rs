//! Infrastructure layer implementing the domain contracts.
//!
//! # Modules
//!
//! - [`fixtures`] - In-memory catalog loaded from the fixture document

pub mod fixtures;
