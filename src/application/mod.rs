//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call into.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential checks and login
//! - [`services::token_service::TokenService`] - Signed access/refresh tokens
//! - [`services::redirect_rule_service::RedirectRuleService`] - Redirect rule CRUD and resolution
//! - [`services::user_service::UserService`] - User creation and password changes

pub mod services;
