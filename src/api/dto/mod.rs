//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs derive `validator::Validate`. Required fields are `Option` so
//! that a missing field is reported per field instead of as a parse failure.

pub mod health;
pub mod redirect_rule;
pub mod token;
