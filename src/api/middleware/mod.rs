//! HTTP middleware for request processing.
//!
//! Provides access-token authentication and request tracing.

pub mod auth;
pub mod tracing;
