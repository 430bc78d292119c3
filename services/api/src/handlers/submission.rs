use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::Submission;
use crate::error::ApiError;
use crate::handlers::InsertResponse;
use crate::state::AppState;
use crate::usecase::submission::{
    ListOwnSubmissionsUseCase, ListPendingSubmissionsUseCase, SubmitAssignmentUseCase,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub assignment_id: String,
    pub examinee_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examinee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id.to_hex(),
            assignment_id: s.assignment_id,
            examinee_email: s.examinee_email,
            examinee_name: s.examinee_name,
            pdf_link: s.pdf_link,
            note: s.note,
            status: s.status,
        }
    }
}

fn to_responses(submissions: Vec<Submission>) -> Vec<SubmissionResponse> {
    submissions
        .into_iter()
        .map(SubmissionResponse::from)
        .collect()
}

#[derive(Deserialize)]
pub struct SubmitterRequest {
    pub email: String,
}

// ── POST /assignments/{id}/submit ────────────────────────────────────────────

pub async fn submit_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResponse>, ApiError> {
    let uc = SubmitAssignmentUseCase {
        repo: state.submissions.as_ref(),
    };
    let outcome = uc.execute(&id, body).await?;
    tracing::info!(assignment = %id, submission = %outcome.inserted_id, "assignment submitted");
    Ok(Json(outcome.into()))
}

// ── POST /submitted-assignments/self ─────────────────────────────────────────

pub async fn list_own_submissions(
    State(state): State<AppState>,
    Json(body): Json<SubmitterRequest>,
) -> Result<Json<Vec<SubmissionResponse>>, ApiError> {
    let uc = ListOwnSubmissionsUseCase {
        repo: state.submissions.as_ref(),
    };
    Ok(Json(to_responses(uc.execute(&body.email).await?)))
}

// ── GET /submitted-assignments/pending ───────────────────────────────────────

pub async fn list_pending_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubmissionResponse>>, ApiError> {
    let uc = ListPendingSubmissionsUseCase {
        repo: state.submissions.as_ref(),
    };
    Ok(Json(to_responses(uc.execute().await?)))
}
