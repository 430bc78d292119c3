use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde_json::Value;

use assignhub_auth_types::cookie::{clear_token_cookie, set_token_cookie};

use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::token::IssueTokenUseCase;

// ── POST /jwt ─────────────────────────────────────────────────────────────────

pub async fn issue_jwt(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = IssueTokenUseCase {
        jwt_secret: &state.jwt_secret,
    };
    let token = usecase.execute(body)?;

    let jar = set_token_cookie(jar, token, state.cookie_secure);
    Ok((
        jar,
        Json(MessageResponse {
            message: "cookie set",
        }),
    ))
}

// ── GET /logout ───────────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_token_cookie(jar, state.cookie_secure);
    (
        jar,
        Json(MessageResponse {
            message: "Cookie deleted",
        }),
    )
}
