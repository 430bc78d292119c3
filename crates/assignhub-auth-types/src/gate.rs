//! Cookie gate: decides whether a request carries a usable credential.

use axum::Json;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use http::StatusCode;

use crate::cookie::WEB_TOKEN;
use crate::token::{IdentityClaim, verify_token};

/// Why the gate turned a request away. Both map to 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    #[error("no token")]
    NoToken,
    #[error("bad token")]
    BadToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        // Body shape is what the browser client branches on.
        let body = match self {
            Self::NoToken => serde_json::json!({ "noToken": true }),
            Self::BadToken => serde_json::json!({ "badToken": true }),
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Evaluate the `webToken` cookie, in order:
/// missing → [`AuthRejection::NoToken`], fails verification →
/// [`AuthRejection::BadToken`], otherwise the decoded claim.
pub fn authenticate(jar: &CookieJar, secret: &str) -> Result<IdentityClaim, AuthRejection> {
    let token = jar.get(WEB_TOKEN).ok_or(AuthRejection::NoToken)?;
    verify_token(token.value(), secret).map_err(|_| AuthRejection::BadToken)
}
