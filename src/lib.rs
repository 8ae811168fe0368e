//! # CineVision Mock Backend
//!
//! A throwaway local HTTP server that answers the CineVision cinema frontend
//! with canned JSON, so the UI can be developed without the real backend.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Catalog entities, the repository trait and the clock
//! - **Application Layer** ([`application`]) - Lookups and mock acknowledgements
//! - **Infrastructure Layer** ([`infrastructure`]) - The JSON fixture document
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! Nothing is persisted. GET endpoints serve fixtures; POST endpoints echo
//! the submitted fields back with generated IDs and timestamps.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                      # listens on 127.0.0.1:8080
//! curl localhost:8080/api/movie/movies/displayingMovies
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AccountService, AdminService, BookingService, CatalogService, CommentService,
    };
    pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
    pub use crate::domain::entities::{AdminCredentials, Movie};
    pub use crate::error::AppError;
    pub use crate::infrastructure::fixtures::FixtureCatalog;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
