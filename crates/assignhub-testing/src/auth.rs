//! Mock auth helpers for integration tests.
//!
//! Protected routes read the `webToken` cookie. `MockAuth` signs a real token
//! with the test secret so requests pass the auth middleware without going
//! through `POST /jwt` first.

use axum::http::{HeaderName, HeaderValue, header};

use assignhub_auth_types::cookie::WEB_TOKEN;
use assignhub_auth_types::token::{IdentityClaim, issue_token};

/// Configurable identity presented by test requests.
pub struct MockAuth {
    pub email: String,
    pub secret: String,
}

impl MockAuth {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }

    /// Signed credential for this identity.
    pub fn token(&self) -> String {
        issue_token(&IdentityClaim::new(self.email.clone()), &self.secret)
            .expect("sign test token")
    }

    /// `Cookie` header carrying the credential.
    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let value = format!("{WEB_TOKEN}={}", self.token());
        (
            header::COOKIE,
            HeaderValue::from_str(&value).expect("token is a valid header value"),
        )
    }
}
