//! Validation of redirect target URLs.

use url::Url;
use validator::ValidationError;

/// Schemes accepted as redirect targets.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

pub const INVALID_URL_MESSAGE: &str = "Enter a valid URL.";

/// Checks that `value` is an absolute URL with a host and a supported scheme.
///
/// Used as a `validator` custom function on request DTOs.
pub fn validate_redirect_url(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("url").with_message(INVALID_URL_MESSAGE.into());

    let parsed = Url::parse(value.trim()).map_err(|_| invalid())?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(invalid());
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_redirect_url("https://test.com").is_ok());
        assert!(validate_redirect_url("http://example.org/path?q=1#frag").is_ok());
        assert!(validate_redirect_url("ftp://files.example.com/a.txt").is_ok());
    }

    #[test]
    fn test_rejects_relative_and_bare_strings() {
        assert!(validate_redirect_url("not-a-valid-url").is_err());
        assert!(validate_redirect_url("/relative/path").is_err());
        assert!(validate_redirect_url("").is_err());
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        assert!(validate_redirect_url("javascript:alert(1)").is_err());
        assert!(validate_redirect_url("mailto:someone@example.com").is_err());
        assert!(validate_redirect_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = validate_redirect_url("nope").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_URL_MESSAGE));
    }
}
