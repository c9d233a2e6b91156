//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod token;

pub use health::health_handler;
pub use links::{
    create_rule_handler, delete_rule_handler, get_rule_handler, list_rules_handler,
    update_rule_handler,
};
pub use redirect::{private_redirect_handler, public_redirect_handler};
pub use token::retrieve_token_handler;
