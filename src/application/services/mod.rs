//! Business logic services for the application layer.

pub mod auth_service;
pub mod redirect_rule_service;
pub mod token_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use redirect_rule_service::RedirectRuleService;
pub use token_service::{TokenService, TokenSettings, TokenType};
pub use user_service::UserService;
