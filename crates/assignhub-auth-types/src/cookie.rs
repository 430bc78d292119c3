//! Cookie builders for the `webToken` credential.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::TOKEN_TTL_SECS;

/// Cookie name carrying the signed credential.
pub const WEB_TOKEN: &str = "webToken";

// Cross-site browser clients need `SameSite=None`, which browsers only accept
// together with `Secure`.
fn same_site(secure: bool) -> SameSite {
    if secure { SameSite::None } else { SameSite::Lax }
}

/// Set the credential cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::{CookieJar, SameSite};
/// use assignhub_auth_types::cookie::{set_token_cookie, WEB_TOKEN};
///
/// let jar = set_token_cookie(CookieJar::new(), "token_value".to_string(), true);
/// let cookie = jar.get(WEB_TOKEN).unwrap();
/// assert_eq!(cookie.value(), "token_value");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(7200)));
/// assert_eq!(cookie.same_site(), Some(SameSite::None));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_token_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((WEB_TOKEN, value))
        .path("/")
        .max_age(Duration::seconds(TOKEN_TTL_SECS as i64))
        .http_only(true)
        .secure(secure)
        .same_site(same_site(secure))
        .build();
    jar.add(cookie)
}

/// Clear the credential cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use assignhub_auth_types::cookie::{clear_token_cookie, set_token_cookie, WEB_TOKEN};
///
/// let jar = set_token_cookie(CookieJar::new(), "t".to_string(), false);
/// let jar = clear_token_cookie(jar, false);
/// let cookie = jar.get(WEB_TOKEN).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_token_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((WEB_TOKEN, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(same_site(secure))
        .build();
    jar.add(cookie)
}
