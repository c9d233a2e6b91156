//! Issuing and verifying signed access/refresh tokens.
//!
//! Tokens are JWTs signed with a process-wide HMAC secret. They are bearer
//! capabilities: nothing is stored server-side, so validity is decided purely by
//! signature and expiry at verification time.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Default access token lifetime.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 5;

/// Default refresh token lifetime.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 1;

/// Immutable signing configuration, built once from [`crate::config::Config`].
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl TokenSettings {
    /// Settings with the default algorithm (HS256) and default lifetimes.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_ttl: Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            refresh_ttl: Duration::days(REFRESH_TOKEN_TTL_DAYS),
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    pub fn refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"***")
            .field("algorithm", &self.algorithm)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Invalid token type: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: TokenType,
        actual: TokenType,
    },

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT payload.
///
/// Access tokens carry `username`; refresh tokens omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

/// Identity recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: i64,
    pub username: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// Signs and verifies tokens with a fixed key and algorithm.
#[derive(Clone)]
pub struct TokenService {
    settings: TokenSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(settings: TokenSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret.as_bytes());

        Self {
            settings,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues a token of the given type expiring `ttl` from now.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if signing fails.
    pub fn issue(
        &self,
        user: &User,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = Utc::now() + ttl;

        let claims = Claims {
            user_id: user.id,
            username: match token_type {
                TokenType::Access => Some(user.username.clone()),
                TokenType::Refresh => None,
            },
            exp: expires_at.timestamp(),
            token_type,
        };

        let token = encode(
            &Header::new(self.settings.algorithm),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    pub fn issue_access(&self, user: &User) -> Result<IssuedToken, TokenError> {
        self.issue(user, TokenType::Access, self.settings.access_ttl)
    }

    pub fn issue_refresh(&self, user: &User) -> Result<IssuedToken, TokenError> {
        self.issue(user, TokenType::Refresh, self.settings.refresh_ttl)
    }

    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access: self.issue_access(user)?,
            refresh: self.issue_refresh(user)?,
        })
    }

    /// Decodes the token, checking signature, algorithm, expiry and type.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Expired`] if `exp` is in the past
    /// - [`TokenError::Invalid`] on bad signature, format or missing claims
    /// - [`TokenError::TypeMismatch`] if the `type` claim differs from `expected`
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<TokenIdentity, TokenError> {
        let mut validation = Validation::new(self.settings.algorithm);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        if claims.token_type != expected {
            return Err(TokenError::TypeMismatch {
                expected,
                actual: claims.token_type,
            });
        }

        Ok(TokenIdentity {
            user_id: claims.user_id,
            username: claims.username,
        })
    }
}
