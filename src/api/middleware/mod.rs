//! HTTP middleware shared by every route.
//!
//! Provides cross-origin headers, panic recovery and request tracing.

pub mod cors;
pub mod panic;
pub mod tracing;
