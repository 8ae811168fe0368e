//! Application layer services implementing the mock behaviour.
//!
//! Services consume the catalog repository and the clock, and provide a small
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Movie, venue, showtime and credit lookups
//! - [`services::booking_service::BookingService`] - Ticket confirmations
//! - [`services::account_service::AccountService`] - Registration and login
//! - [`services::comment_service::CommentService`] - Comment posting and deletion
//! - [`services::admin_service::AdminService`] - Admin catalog additions

pub mod services;
