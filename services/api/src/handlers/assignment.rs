use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use assignhub_auth_types::token::IdentityClaim;

use crate::domain::types::{Assignment, Difficulty};
use crate::error::ApiError;
use crate::handlers::{DeleteResponse, InsertResponse, UpdateResponse};
use crate::state::AppState;
use crate::usecase::assignment::{
    CreateAssignmentUseCase, DeleteAssignmentUseCase, GetAssignmentUseCase,
    ListAssignmentsUseCase, UpdateAssignmentUseCase, check_ownership,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub creator_email: String,
}

impl From<Assignment> for AssignmentResponse {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id.to_hex(),
            title: a.title,
            difficulty: a.difficulty,
            description: a.description,
            marks: a.marks,
            thumbnail_url: a.thumbnail_url,
            due_date: a.due_date,
            creator_email: a.creator_email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProceedResponse {
    pub can_proceed: bool,
}

#[derive(Deserialize)]
pub struct OwnerRequest {
    pub email: String,
}

// ── POST /assignments/create ─────────────────────────────────────────────────

pub async fn create_assignment(
    identity: IdentityClaim,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResponse>, ApiError> {
    let uc = CreateAssignmentUseCase {
        repo: state.assignments.as_ref(),
    };
    let outcome = uc.execute(&identity, body).await?;
    tracing::info!(id = %outcome.inserted_id, creator = %identity.email, "assignment created");
    Ok(Json(outcome.into()))
}

// ── GET /assignments/{id} ────────────────────────────────────────────────────

pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<AssignmentResponse>>, ApiError> {
    let uc = GetAssignmentUseCase {
        repo: state.assignments.as_ref(),
    };
    let assignment = uc.execute(&id).await?;
    Ok(Json(assignment.map(AssignmentResponse::from)))
}

// ── POST /assignments ────────────────────────────────────────────────────────

pub async fn list_assignments(
    State(state): State<AppState>,
    Json(filter): Json<Map<String, Value>>,
) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    let uc = ListAssignmentsUseCase {
        repo: state.assignments.as_ref(),
    };
    let assignments = uc.execute(filter).await?;
    Ok(Json(
        assignments
            .into_iter()
            .map(AssignmentResponse::from)
            .collect(),
    ))
}

// ── POST /assignments/can-update, POST /assignments/can-delete ───────────────

pub async fn can_update(
    identity: IdentityClaim,
    Json(body): Json<OwnerRequest>,
) -> Result<Json<ProceedResponse>, ApiError> {
    check_ownership(&identity, &body.email)?;
    Ok(Json(ProceedResponse { can_proceed: true }))
}

pub async fn can_delete(
    identity: IdentityClaim,
    Json(body): Json<OwnerRequest>,
) -> Result<Json<ProceedResponse>, ApiError> {
    check_ownership(&identity, &body.email)?;
    Ok(Json(ProceedResponse { can_proceed: true }))
}

// ── PUT /assignments/{id}/update ─────────────────────────────────────────────

pub async fn update_assignment(
    identity: IdentityClaim,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let uc = UpdateAssignmentUseCase {
        repo: state.assignments.as_ref(),
    };
    let outcome = uc.execute(&identity, &id, body).await?;
    Ok(Json(outcome.into()))
}

// ── DELETE /assignments/{id}/delete ──────────────────────────────────────────

pub async fn delete_assignment(
    identity: IdentityClaim,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let uc = DeleteAssignmentUseCase {
        repo: state.assignments.as_ref(),
    };
    let outcome = uc.execute(&identity, &id).await?;
    if outcome.deleted_count > 0 {
        tracing::info!(%id, by = %identity.email, "assignment deleted");
    }
    Ok(Json(outcome.into()))
}
