//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` row mapping.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Credential store
//! - [`PgRedirectRuleRepository`] - Redirect rule storage and lookup

pub mod pg_redirect_rule_repository;
pub mod pg_user_repository;

pub use pg_redirect_rule_repository::PgRedirectRuleRepository;
pub use pg_user_repository::PgUserRepository;
