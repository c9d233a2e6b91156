//! DTOs for the token endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /retrieve-token/`.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field is required.")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field is required.")
    )]
    pub password: Option<String>,
}

/// Successful login: both tokens plus the caller's identity.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub username: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reported_individually() {
        let request = LoginRequest {
            username: Some("alice".to_string()),
            password: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("username"));
    }

    #[test]
    fn test_empty_strings_are_missing() {
        let request = LoginRequest {
            username: Some(String::new()),
            password: Some(String::new()),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
