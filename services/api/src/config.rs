use axum::http::HeaderValue;
use url::form_urlencoded::byte_serialize;

/// API configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// Database username. Env var: `DB_user` (or `DB_USER`).
    pub db_user: String,
    /// Database password. Env var: `DB_pass` (or `DB_PASS`).
    pub db_pass: String,
    /// Atlas cluster host. Env var: `DB_HOST`.
    pub db_host: String,
    /// Application database name (default "assignmentDB"). Env var: `DB_NAME`.
    pub db_name: String,
    /// HMAC secret for signing `webToken` credentials. Env var: `ACCESS_TOKEN_SECRET`.
    pub jwt_secret: String,
    /// TCP port to listen on (default 5000). Env var: `PORT`.
    pub port: u16,
    /// `Secure` attribute of the token cookie (default true). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Browser origins allowed to make credentialed requests, comma separated.
    /// Env var: `CLIENT_ORIGINS`.
    pub client_origins: Vec<String>,
}

const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Credentials are read from `DB_user` and
    /// `DB_pass` (the names existing deployments use), falling back to
    /// `DB_USER` and `DB_PASS`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_user: var("DB_user")
                .or_else(|| var("DB_USER"))
                .expect("DB_user"),
            db_pass: var("DB_pass")
                .or_else(|| var("DB_PASS"))
                .expect("DB_pass"),
            db_host: var("DB_HOST").unwrap_or_else(|| "cluster0.ejmezk0.mongodb.net".to_owned()),
            db_name: var("DB_NAME").unwrap_or_else(|| "assignmentDB".to_owned()),
            jwt_secret: var("ACCESS_TOKEN_SECRET").expect("ACCESS_TOKEN_SECRET"),
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(5000),
            cookie_secure: var("COOKIE_SECURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            client_origins: var("CLIENT_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|| vec![DEFAULT_CLIENT_ORIGIN.to_owned()]),
        }
    }

    /// `client_origins` as header values. A wildcard cannot be combined with
    /// credentials, so `*` is skipped along with unparsable entries.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.client_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) if origin != "*" => Some(value),
                _ => {
                    tracing::warn!(%origin, "ignoring invalid client origin");
                    None
                }
            })
            .collect()
    }

    /// SRV connection string with percent-encoded credentials.
    pub fn database_uri(&self) -> String {
        let user: String = byte_serialize(self.db_user.as_bytes()).collect();
        let pass: String = byte_serialize(self.db_pass.as_bytes()).collect();
        format!(
            "mongodb+srv://{user}:{pass}@{}/?retryWrites=true&w=majority",
            self.db_host
        )
    }
}
