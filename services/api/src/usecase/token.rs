use serde_json::Value;

use assignhub_auth_types::token::{IdentityClaim, issue_token};

use crate::domain::types::from_body;
use crate::error::ApiError;

// ── IssueToken (POST /jwt) ───────────────────────────────────────────────────

pub struct IssueTokenUseCase<'a> {
    pub jwt_secret: &'a str,
}

impl IssueTokenUseCase<'_> {
    /// Sign a credential for the email in `body`. Other body fields are ignored.
    pub fn execute(&self, body: Value) -> Result<String, ApiError> {
        let claim: IdentityClaim = from_body(body)?;
        if claim.email.trim().is_empty() {
            return Err(ApiError::InvalidDocument("email must not be empty".to_owned()));
        }
        Ok(issue_token(&claim, self.jwt_secret)?)
    }
}
