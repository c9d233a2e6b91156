//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Credential store
//! - [`RedirectRuleRepository`] - Redirect rule CRUD
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod redirect_rule_repository;
pub mod user_repository;

pub use redirect_rule_repository::{
    IDENTIFIER_CONSTRAINT, PRIMARY_KEY_CONSTRAINT, RedirectRuleRepository,
};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use redirect_rule_repository::MockRedirectRuleRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
