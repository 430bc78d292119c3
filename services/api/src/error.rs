use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use assignhub_auth_types::gate::AuthRejection;
use assignhub_auth_types::token::TokenError;

/// API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthRejection),
    #[error("wrong user")]
    WrongUser,
    #[error("invalid id `{0}`")]
    InvalidId(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("token error")]
    Token(#[from] TokenError),
    #[error("database error")]
    Database(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(AuthRejection::NoToken) => "NO_TOKEN",
            Self::Auth(AuthRejection::BadToken) => "BAD_TOKEN",
            Self::WrongUser => "WRONG_USER",
            Self::InvalidId(_) => "INVALID_ID",
            Self::InvalidDocument(_) => "INVALID_DOCUMENT",
            Self::Token(_) => "INTERNAL",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Auth(rejection) => return (*rejection).into_response(),
            Self::WrongUser => {
                return (
                    StatusCode::FORBIDDEN,
                    Json(serde_json::json!({ "wrongUser": true })),
                )
                    .into_response();
            }
            Self::InvalidId(_) | Self::InvalidDocument(_) => StatusCode::BAD_REQUEST,
            Self::Token(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Only 500s are logged here; TraceLayer records method, uri and status.
        match &self {
            Self::Database(e) => tracing::error!(error = ?e, kind = self.kind(), "database error"),
            Self::Token(e) => tracing::error!(error = %e, kind = self.kind(), "token error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
