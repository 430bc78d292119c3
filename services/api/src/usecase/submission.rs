use serde_json::Value;

use crate::domain::repository::SubmissionRepository;
use crate::domain::types::{
    InsertOutcome, NewSubmission, Submission, SubmissionDraft, from_body, parse_object_id,
};
use crate::error::ApiError;

// ── SubmitAssignment ─────────────────────────────────────────────────────────

pub struct SubmitAssignmentUseCase<'a> {
    pub repo: &'a dyn SubmissionRepository,
}

impl SubmitAssignmentUseCase<'_> {
    /// Record a pending submission. The assignment id must be well formed but is
    /// not looked up.
    pub async fn execute(
        &self,
        raw_assignment_id: &str,
        body: Value,
    ) -> Result<InsertOutcome, ApiError> {
        let assignment_id = parse_object_id(raw_assignment_id)?;
        let draft: SubmissionDraft = from_body(body)?;
        draft.validate()?;
        let submission = NewSubmission::pending(assignment_id, draft);
        self.repo.create(&submission).await
    }
}

// ── ListOwnSubmissions ───────────────────────────────────────────────────────

pub struct ListOwnSubmissionsUseCase<'a> {
    pub repo: &'a dyn SubmissionRepository,
}

impl ListOwnSubmissionsUseCase<'_> {
    pub async fn execute(&self, email: &str) -> Result<Vec<Submission>, ApiError> {
        self.repo.list_by_submitter(email).await
    }
}

// ── ListPendingSubmissions ───────────────────────────────────────────────────

pub struct ListPendingSubmissionsUseCase<'a> {
    pub repo: &'a dyn SubmissionRepository,
}

impl ListPendingSubmissionsUseCase<'_> {
    pub async fn execute(&self) -> Result<Vec<Submission>, ApiError> {
        self.repo.list_pending().await
    }
}
