//! Authentication extractors.
//!
//! Identity resolution is total: a request with no `Authorization` header
//! resolves to [`Principal::Anonymous`] instead of being rejected, and each
//! protected handler decides for itself by calling [`Principal::require`].
//! Only a present-but-unverifiable token rejects at extraction time.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use cartwheel_core::CustomerName;

use crate::error::AppError;
use crate::state::AppState;

/// The resolved identity for a request.
///
/// Carries the token subject's name only - no id, no roles. Every
/// downstream authorized operation re-resolves the customer record from
/// the name before it can validate ownership.
#[derive(Debug, Clone)]
pub enum Principal {
    /// No credential was presented.
    Anonymous,
    /// A verified token named this customer.
    Customer(CustomerName),
}

impl Principal {
    /// The acting customer's name, or an unauthorized error for handlers
    /// that require authentication.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` for [`Principal::Anonymous`].
    pub fn require(&self) -> Result<&CustomerName, AppError> {
        match self {
            Self::Customer(name) => Ok(name),
            Self::Anonymous => Err(AppError::Unauthorized(
                "authentication required".to_owned(),
            )),
        }
    }
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self::Anonymous);
        };

        let subject = state.tokens().verify(token)?;
        let name = CustomerName::parse(&subject)
            .map_err(|e| AppError::Unauthorized(format!("invalid token subject: {e}")))?;

        Ok(Self::Customer(name))
    }
}

/// Extract the bearer credential from an `Authorization` header, if any.
///
/// The scheme is matched case-insensitively; a header with a different
/// scheme counts as no credential.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).expect("header value"),
        );
        headers
    }

    #[test]
    fn test_bearer_token_present() {
        assert_eq!(
            bearer_token(&headers_with("Bearer abc.def.ghi")),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_bearer_scheme_case_insensitive() {
        assert_eq!(bearer_token(&headers_with("bearer tok")), Some("tok"));
        assert_eq!(bearer_token(&headers_with("BEARER tok")), Some("tok"));
    }

    #[test]
    fn test_no_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_other_scheme_is_none() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwdw==")), None);
    }

    #[test]
    fn test_empty_token_is_none() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }

    #[test]
    fn test_require_anonymous_is_unauthorized() {
        assert!(Principal::Anonymous.require().is_err());
    }

    #[test]
    fn test_require_customer_yields_name() {
        let name = CustomerName::parse("alice").expect("valid name");
        let principal = Principal::Customer(name.clone());
        assert_eq!(principal.require().expect("authorized"), &name);
    }
}
