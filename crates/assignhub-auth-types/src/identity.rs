//! Extractor for the identity attached by the auth middleware.

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::gate::AuthRejection;
use crate::token::IdentityClaim;

/// Reads the [`IdentityClaim`] the auth middleware stored in request extensions.
///
/// A handler mounted without the middleware has no claim to read and answers
/// 401 `{"noToken":true}`.
impl<S> FromRequestParts<S> for IdentityClaim
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    // axum-core 0.5 declares `fn -> impl Future + Send`; extract synchronously and
    // return a 'static async block so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let claim = parts.extensions.get::<IdentityClaim>().cloned();
        async move { claim.ok_or(AuthRejection::NoToken) }
    }
}
