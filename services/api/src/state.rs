use std::sync::Arc;

use axum::http::HeaderValue;
use mongodb::Database;

use crate::config::ApiConfig;
use crate::domain::repository::{AssignmentRepository, SubmissionRepository};
use crate::infra::db::{MongoAssignmentRepository, MongoSubmissionRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub assignments: Arc<dyn AssignmentRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub jwt_secret: String,
    pub cookie_secure: bool,
    /// Origins that may call the API with the `webToken` cookie.
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    /// Stores backed by `db`.
    pub fn with_database(db: &Database, config: &ApiConfig) -> Self {
        Self {
            assignments: Arc::new(MongoAssignmentRepository::new(db)),
            submissions: Arc::new(MongoSubmissionRepository::new(db)),
            jwt_secret: config.jwt_secret.clone(),
            cookie_secure: config.cookie_secure,
            allowed_origins: config.allowed_origins(),
        }
    }
}
