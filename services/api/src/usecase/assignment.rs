use serde_json::{Map, Value};

use assignhub_auth_types::token::IdentityClaim;

use crate::domain::repository::AssignmentRepository;
use crate::domain::types::{
    Assignment, AssignmentDraft, AssignmentPatch, AssignmentQuery, DeleteOutcome, InsertOutcome,
    NewAssignment, UpdateOutcome, can_modify, from_body, parse_object_id,
};
use crate::error::ApiError;

// ── CreateAssignment ─────────────────────────────────────────────────────────

pub struct CreateAssignmentUseCase<'a> {
    pub repo: &'a dyn AssignmentRepository,
}

impl CreateAssignmentUseCase<'_> {
    /// Validate the body and insert it with the caller as author.
    pub async fn execute(
        &self,
        identity: &IdentityClaim,
        body: Value,
    ) -> Result<InsertOutcome, ApiError> {
        let draft: AssignmentDraft = from_body(body)?;
        draft.validate()?;
        let assignment = NewAssignment::from_draft(draft, identity.email.clone());
        self.repo.create(&assignment).await
    }
}

// ── ListAssignments ──────────────────────────────────────────────────────────

pub struct ListAssignmentsUseCase<'a> {
    pub repo: &'a dyn AssignmentRepository,
}

impl ListAssignmentsUseCase<'_> {
    pub async fn execute(&self, filter: Map<String, Value>) -> Result<Vec<Assignment>, ApiError> {
        let query = AssignmentQuery::parse(filter)?;
        self.repo.list(&query).await
    }
}

// ── GetAssignment ────────────────────────────────────────────────────────────

pub struct GetAssignmentUseCase<'a> {
    pub repo: &'a dyn AssignmentRepository,
}

impl GetAssignmentUseCase<'_> {
    /// `None` when no document has this id; a malformed id is an error.
    pub async fn execute(&self, raw_id: &str) -> Result<Option<Assignment>, ApiError> {
        let id = parse_object_id(raw_id)?;
        self.repo.find_by_id(id).await
    }
}

// ── CheckOwnership ───────────────────────────────────────────────────────────

/// Backs `can-update` and `can-delete`: the caller may proceed only when they
/// are the owner named in the request.
pub fn check_ownership(identity: &IdentityClaim, owner_email: &str) -> Result<(), ApiError> {
    if can_modify(&identity.email, owner_email) {
        Ok(())
    } else {
        Err(ApiError::WrongUser)
    }
}

/// Re-checked at the mutating endpoints against the stored author. Unknown ids
/// pass through so the store reports its zero-count outcome. Documents without a
/// `creatorEmail` have no owner and are refused to everyone; `/jwt` never signs
/// a blank email, so no credential can match them.
async fn ensure_owner(
    repo: &dyn AssignmentRepository,
    identity: &IdentityClaim,
    id: mongodb::bson::oid::ObjectId,
) -> Result<(), ApiError> {
    match repo.find_by_id(id).await? {
        Some(existing) => check_ownership(identity, &existing.creator_email),
        None => Ok(()),
    }
}

// ── UpdateAssignment ─────────────────────────────────────────────────────────

pub struct UpdateAssignmentUseCase<'a> {
    pub repo: &'a dyn AssignmentRepository,
}

impl UpdateAssignmentUseCase<'_> {
    pub async fn execute(
        &self,
        identity: &IdentityClaim,
        raw_id: &str,
        body: Value,
    ) -> Result<UpdateOutcome, ApiError> {
        let id = parse_object_id(raw_id)?;
        let patch: AssignmentPatch = from_body(body)?;
        patch.validate()?;
        ensure_owner(self.repo, identity, id).await?;
        self.repo.update_by_id(id, &patch).await
    }
}

// ── DeleteAssignment ─────────────────────────────────────────────────────────

pub struct DeleteAssignmentUseCase<'a> {
    pub repo: &'a dyn AssignmentRepository,
}

impl DeleteAssignmentUseCase<'_> {
    pub async fn execute(
        &self,
        identity: &IdentityClaim,
        raw_id: &str,
    ) -> Result<DeleteOutcome, ApiError> {
        let id = parse_object_id(raw_id)?;
        ensure_owner(self.repo, identity, id).await?;
        self.repo.delete_by_id(id).await
    }
}
