//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses in the shapes the frontend expects.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Lenient JSON body extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS, panic recovery and request tracing
//! - [`routes`] - Route configuration and the endpoint table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
