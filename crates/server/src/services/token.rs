//! Access-token codec.
//!
//! Issues and verifies the signed bearer tokens handed out at login. The
//! payload carries the customer name as its subject and nothing else about
//! the customer; every authorized operation re-resolves the record from the
//! name. There is no revocation list - rotating the signing key invalidates
//! all outstanding tokens.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is malformed, has a bad signature, or is expired.
    #[error("invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// The token could not be signed.
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Standard subject - the customer name.
    sub: String,
    /// Issued-at (Unix timestamp, seconds).
    iat: i64,
    /// Expiry (Unix timestamp, seconds).
    exp: i64,
}

/// Signs and verifies access tokens (HMAC-SHA256).
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenCodec {
    /// Create a codec from the configured signing key and token lifetime.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_secs: u64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret_bytes),
            decoding: DecodingKey::from_secret(secret_bytes),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Issue a token for the given subject.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_owned(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the signature, format, or expiry
    /// check fails.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(TokenError::Invalid)?;

        Ok(data.claims.sub)
    }
}
