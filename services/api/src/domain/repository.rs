use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::types::{
    Assignment, AssignmentPatch, AssignmentQuery, DeleteOutcome, InsertOutcome, NewAssignment,
    NewSubmission, Submission, UpdateOutcome,
};
use crate::error::ApiError;

/// Store for the `assignments` collection.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn create(&self, assignment: &NewAssignment) -> Result<InsertOutcome, ApiError>;

    /// Natural (insertion) order, no pagination.
    async fn list(&self, query: &AssignmentQuery) -> Result<Vec<Assignment>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Assignment>, ApiError>;

    /// `$set` the present patch fields. An unknown id is not an error: it reports
    /// `matched_count == 0`.
    async fn update_by_id(
        &self,
        id: ObjectId,
        patch: &AssignmentPatch,
    ) -> Result<UpdateOutcome, ApiError>;

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteOutcome, ApiError>;
}

/// Store for the `submittedAssignments` collection. Insert and query only.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, submission: &NewSubmission) -> Result<InsertOutcome, ApiError>;

    async fn list_by_submitter(&self, email: &str) -> Result<Vec<Submission>, ApiError>;

    async fn list_pending(&self) -> Result<Vec<Submission>, ApiError>;
}
