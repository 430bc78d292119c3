use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use assignhub_api::domain::repository::{AssignmentRepository, SubmissionRepository};
use assignhub_api::domain::types::{
    Assignment, AssignmentPatch, AssignmentQuery, DeleteOutcome, Difficulty, InsertOutcome,
    NewAssignment, NewSubmission, PENDING_STATUS, Submission, UpdateOutcome,
};
use assignhub_api::error::ApiError;
use assignhub_api::router::build_router;
use assignhub_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
pub const TEST_CLIENT_ORIGIN: &str = "http://localhost:5173";

// ── InMemoryAssignmentRepo ───────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryAssignmentRepo {
    pub docs: Arc<Mutex<Vec<Assignment>>>,
}

impl InMemoryAssignmentRepo {
    pub fn with(docs: Vec<Assignment>) -> Self {
        Self {
            docs: Arc::new(Mutex::new(docs)),
        }
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

fn matches_fields(assignment: &Assignment, query: &AssignmentQuery) -> bool {
    match query {
        AssignmentQuery::All => true,
        AssignmentQuery::Matching(fields) => {
            let stored = serde_json::to_value(assignment).unwrap();
            fields
                .iter()
                .all(|(field, expected)| stored.get(field) == Some(expected))
        }
    }
}

fn apply_patch(assignment: &mut Assignment, patch: &AssignmentPatch) -> bool {
    let before = assignment.clone();
    if let Some(title) = &patch.title {
        assignment.title = title.clone();
    }
    if let Some(difficulty) = patch.difficulty {
        assignment.difficulty = difficulty;
    }
    if let Some(description) = &patch.description {
        assignment.description = Some(description.clone());
    }
    if let Some(marks) = patch.marks {
        assignment.marks = Some(marks);
    }
    if let Some(thumbnail_url) = &patch.thumbnail_url {
        assignment.thumbnail_url = Some(thumbnail_url.clone());
    }
    if let Some(due_date) = &patch.due_date {
        assignment.due_date = Some(due_date.clone());
    }
    *assignment != before
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepo {
    async fn create(&self, assignment: &NewAssignment) -> Result<InsertOutcome, ApiError> {
        let id = ObjectId::new();
        self.docs
            .lock()
            .unwrap()
            .push(assignment.clone().into_assignment(id));
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn list(&self, query: &AssignmentQuery) -> Result<Vec<Assignment>, ApiError> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|a| matches_fields(a, query))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Assignment>, ApiError> {
        Ok(self.docs.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        patch: &AssignmentPatch,
    ) -> Result<UpdateOutcome, ApiError> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|a| a.id == id) {
            Some(assignment) => {
                let modified = apply_patch(assignment, patch);
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: u64::from(modified),
                })
            }
            None => Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteOutcome, ApiError> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|a| a.id != id);
        Ok(DeleteOutcome {
            deleted_count: (before - docs.len()) as u64,
        })
    }
}

// ── InMemorySubmissionRepo ───────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemorySubmissionRepo {
    pub docs: Arc<Mutex<Vec<Submission>>>,
}

impl InMemorySubmissionRepo {
    pub fn with(docs: Vec<Submission>) -> Self {
        Self {
            docs: Arc::new(Mutex::new(docs)),
        }
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepo {
    async fn create(&self, submission: &NewSubmission) -> Result<InsertOutcome, ApiError> {
        let id = ObjectId::new();
        self.docs
            .lock()
            .unwrap()
            .push(submission.clone().into_submission(id));
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn list_by_submitter(&self, email: &str) -> Result<Vec<Submission>, ApiError> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.examinee_email == email)
            .cloned()
            .collect())
    }

    async fn list_pending(&self) -> Result<Vec<Submission>, ApiError> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.status == PENDING_STATUS)
            .cloned()
            .collect())
    }
}

// ── FailingAssignmentRepo ────────────────────────────────────────────────────

/// Every call fails like a dropped database connection.
pub struct FailingAssignmentRepo;

fn connection_lost() -> ApiError {
    ApiError::Database(anyhow::anyhow!("connection lost"))
}

#[async_trait]
impl AssignmentRepository for FailingAssignmentRepo {
    async fn create(&self, _assignment: &NewAssignment) -> Result<InsertOutcome, ApiError> {
        Err(connection_lost())
    }

    async fn list(&self, _query: &AssignmentQuery) -> Result<Vec<Assignment>, ApiError> {
        Err(connection_lost())
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Assignment>, ApiError> {
        Err(connection_lost())
    }

    async fn update_by_id(
        &self,
        _id: ObjectId,
        _patch: &AssignmentPatch,
    ) -> Result<UpdateOutcome, ApiError> {
        Err(connection_lost())
    }

    async fn delete_by_id(&self, _id: ObjectId) -> Result<DeleteOutcome, ApiError> {
        Err(connection_lost())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_assignment(title: &str, difficulty: Difficulty, creator_email: &str) -> Assignment {
    Assignment {
        id: ObjectId::new(),
        title: title.to_owned(),
        difficulty,
        description: None,
        marks: Some(10),
        thumbnail_url: None,
        due_date: None,
        creator_email: creator_email.to_owned(),
    }
}

pub fn test_submission(examinee_email: &str, status: &str) -> Submission {
    Submission {
        id: ObjectId::new(),
        assignment_id: ObjectId::new().to_hex(),
        examinee_email: examinee_email.to_owned(),
        examinee_name: None,
        pdf_link: Some("https://docs.example.com/answer.pdf".to_owned()),
        note: None,
        status: status.to_owned(),
    }
}

pub fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Router over in-memory stores, with cookies marked non-secure.
pub fn test_router(
    assignments: InMemoryAssignmentRepo,
    submissions: InMemorySubmissionRepo,
) -> axum::Router {
    build_router(AppState {
        assignments: Arc::new(assignments),
        submissions: Arc::new(submissions),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        cookie_secure: false,
        allowed_origins: vec![HeaderValue::from_static(TEST_CLIENT_ORIGIN)],
    })
}
