//! Signed, time-limited credentials carrying an email identity claim.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Credential lifetime in seconds (2 hours). Also used as the cookie Max-Age.
pub const TOKEN_TTL_SECS: u64 = 7200;

/// Identity carried inside a credential. Only the email is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub email: String,
}

impl IdentityClaim {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Errors returned by [`issue_token`] and [`verify_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid or expired token")]
    InvalidOrExpired,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `email` | custom | identity of the holder |
/// | `iat` | `iat` | issue time, seconds since epoch |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub email: String,
    pub iat: u64,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign `claim` with `secret`, expiring [`TOKEN_TTL_SECS`] from now.
pub fn issue_token(claim: &IdentityClaim, secret: &str) -> Result<String, TokenError> {
    issue_token_at(claim, secret, now_secs())
}

/// Sign `claim` as if it had been issued at `issued_at` (seconds since epoch).
pub fn issue_token_at(
    claim: &IdentityClaim,
    secret: &str,
    issued_at: u64,
) -> Result<String, TokenError> {
    let claims = JwtClaims {
        email: claim.email.clone(),
        iat: issued_at,
        exp: issued_at + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Check signature and expiration, returning the embedded claim.
///
/// Validation: HS256, `exp` required and checked with no leeway. There is no
/// revocation list; a credential stays valid until it expires.
pub fn verify_token(token: &str, secret: &str) -> Result<IdentityClaim, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(reason = ?e.kind(), "token rejected");
        TokenError::InvalidOrExpired
    })?;

    Ok(IdentityClaim {
        email: data.claims.email,
    })
}
