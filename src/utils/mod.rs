//! Utility functions shared across layers.
//!
//! - [`identifier`] - Redirect identifier generation
//! - [`password`] - Password hashing and verification
//! - [`url_validator`] - Redirect target validation

pub mod identifier;
pub mod password;
pub mod url_validator;
