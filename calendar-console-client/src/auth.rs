//! Authentication support: the token exchange and unverified JWT claims.
//!
//! The server issues a bearer JWT from `POST /api/authenticate`. The client
//! never verifies the signature (the server does that on every request); it
//! only decodes the payload to learn the session's authorities and expiry
//! for client-side route gating.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// Authority required by every entity page.
pub const AUTHORITY_USER: &str = "ROLE_USER";
/// Authority granted to administrators.
pub const AUTHORITY_ADMIN: &str = "ROLE_ADMIN";

/// Decoded JWT payload.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtClaims {
    /// Subject: the login of the authenticated user.
    pub sub: String,
    /// Comma-separated granted authorities, e.g. `"ROLE_ADMIN,ROLE_USER"`.
    #[serde(default)]
    pub auth: String,
    /// Expiry as seconds since the epoch.
    #[serde(default)]
    pub exp: i64,
}

impl JwtClaims {
    /// Decodes the payload segment of a compact JWT without verifying it.
    pub fn decode(token: &str) -> Result<Self, ApiError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) => payload,
            _ => {
                return Err(ApiError::Parse {
                    detail: "token is not a compact JWT".to_string(),
                });
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| ApiError::Parse {
                detail: format!("token payload is not base64url: {e}"),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse {
            detail: format!("token payload is not valid JSON: {e}"),
        })
    }

    /// Granted authorities, split out of the `auth` claim.
    pub fn authorities(&self) -> Vec<&str> {
        self.auth
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }

    /// Whether the session carries the given authority.
    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities().iter().any(|a| *a == authority)
    }

    /// Expiry instant, if the claim is present and valid.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        (self.exp > 0).then(|| Utc.timestamp_opt(self.exp, 0).single())?
    }

    /// Whether the token has expired relative to `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS512"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_subject_and_authorities() {
        let token = token_with_payload(
            r#"{"sub":"admin","auth":"ROLE_ADMIN,ROLE_USER","exp":4102444800}"#,
        );
        let claims = JwtClaims::decode(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.authorities(), vec!["ROLE_ADMIN", "ROLE_USER"]);
        assert!(claims.has_authority(AUTHORITY_USER));
        assert!(claims.has_authority(AUTHORITY_ADMIN));
    }

    #[test]
    fn missing_authority_is_denied() {
        let token = token_with_payload(r#"{"sub":"user","auth":"ROLE_USER","exp":4102444800}"#);
        let claims = JwtClaims::decode(&token).unwrap();
        assert!(!claims.has_authority(AUTHORITY_ADMIN));
    }

    #[test]
    fn expiry_comparison() {
        let token = token_with_payload(r#"{"sub":"user","auth":"ROLE_USER","exp":1000000000}"#);
        let claims = JwtClaims::decode(&token).unwrap();
        let before = Utc.timestamp_opt(999_999_999, 0).unwrap();
        let after = Utc.timestamp_opt(1_000_000_001, 0).unwrap();
        assert!(!claims.is_expired_at(before));
        assert!(claims.is_expired_at(after));
    }

    #[test]
    fn no_exp_claim_never_expires() {
        let token = token_with_payload(r#"{"sub":"user","auth":"ROLE_USER"}"#);
        let claims = JwtClaims::decode(&token).unwrap();
        assert_eq!(claims.expires_at(), None);
        assert!(!claims.is_expired_at(Utc::now()));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(
            JwtClaims::decode("not-a-jwt"),
            Err(ApiError::Parse { .. })
        ));
        assert!(matches!(
            JwtClaims::decode("a.!!!.c"),
            Err(ApiError::Parse { .. })
        ));
    }
}
