use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use assignhub_auth_types::gate::{AuthRejection, authenticate};

use crate::state::AppState;

/// Gate for protected routes. On success the decoded `IdentityClaim` is stored
/// in request extensions for the handler; otherwise the request never reaches
/// a store.
pub async fn require_token(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let claim = authenticate(&jar, &state.jwt_secret).inspect_err(|rejection| {
        tracing::debug!(%rejection, path = %req.uri().path(), "request rejected by auth gate");
    })?;
    req.extensions_mut().insert(claim);
    Ok(next.run(req).await)
}
