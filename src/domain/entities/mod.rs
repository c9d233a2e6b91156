//! Core domain entities.
//!
//! Entities are plain data structures. Creation and update inputs live next to
//! the entity they produce:
//!
//! - [`User`] / [`NewUser`] - credential store records
//! - [`RedirectRule`] / [`NewRedirectRule`] / [`RedirectRulePatch`] - redirect rules

pub mod redirect_rule;
pub mod user;

pub use redirect_rule::{NewRedirectRule, REDIRECT_IDENTIFIER_LENGTH, RedirectRule, RedirectRulePatch};
pub use user::{NewUser, PublicUser, User};
