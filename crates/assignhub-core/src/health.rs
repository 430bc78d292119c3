/// Body returned by `GET /`.
pub const HEALTH_MESSAGE: &str = "server ok";

/// Handler for `GET /`, a plaintext liveness check.
pub async fn root() -> &'static str {
    HEALTH_MESSAGE
}
