use anyhow::Context as _;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId, to_bson, to_document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::results::InsertOneResult;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::domain::repository::{AssignmentRepository, SubmissionRepository};
use crate::domain::types::{
    Assignment, AssignmentPatch, AssignmentQuery, DeleteOutcome, InsertOutcome, NewAssignment,
    NewSubmission, PENDING_STATUS, Submission, UpdateOutcome,
};
use crate::error::ApiError;

pub const ASSIGNMENTS: &str = "assignments";
pub const SUBMITTED_ASSIGNMENTS: &str = "submittedAssignments";

/// Build the process-wide client, ping the deployment and hand back the
/// application database. The client is pooled and cheap to clone.
pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("parse connection string")?;
    options.server_api = Some(server_api());

    let client = Client::with_options(options).context("build database client")?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("ping deployment")?;
    info!("pinged deployment, connected to MongoDB");

    Ok(client.database(db_name))
}

/// Stable API v1, strict, with deprecated commands reported as errors.
fn server_api() -> ServerApi {
    ServerApi::builder()
        .version(ServerApiVersion::V1)
        .strict(true)
        .deprecation_errors(true)
        .build()
}

fn inserted_object_id(result: InsertOneResult) -> Result<InsertOutcome, ApiError> {
    let inserted_id = result
        .inserted_id
        .as_object_id()
        .context("inserted id is not an ObjectId")?;
    Ok(InsertOutcome { inserted_id })
}

fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

fn query_filter(query: &AssignmentQuery) -> Result<Document, ApiError> {
    let mut filter = Document::new();
    if let AssignmentQuery::Matching(fields) = query {
        for (field, value) in fields {
            let value = to_bson(value).context("encode filter value")?;
            filter.insert(field.clone(), value);
        }
    }
    Ok(filter)
}

// ── Assignment store ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoAssignmentRepository {
    pub collection: Collection<Assignment>,
}

impl MongoAssignmentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(ASSIGNMENTS),
        }
    }
}

#[async_trait]
impl AssignmentRepository for MongoAssignmentRepository {
    async fn create(&self, assignment: &NewAssignment) -> Result<InsertOutcome, ApiError> {
        let result = self
            .collection
            .clone_with_type::<NewAssignment>()
            .insert_one(assignment)
            .await
            .context("insert assignment")?;
        inserted_object_id(result)
    }

    async fn list(&self, query: &AssignmentQuery) -> Result<Vec<Assignment>, ApiError> {
        let filter = query_filter(query)?;
        let assignments: Vec<Assignment> = self
            .collection
            .find(filter)
            .await
            .context("find assignments")?
            .try_collect()
            .await
            .context("read assignments cursor")?;
        Ok(assignments)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Assignment>, ApiError> {
        let assignment = self
            .collection
            .find_one(by_id(id))
            .await
            .context("find assignment by id")?;
        Ok(assignment)
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        patch: &AssignmentPatch,
    ) -> Result<UpdateOutcome, ApiError> {
        let fields = to_document(patch).context("encode assignment patch")?;
        let result = self
            .collection
            .update_one(by_id(id), doc! { "$set": fields })
            .await
            .context("update assignment")?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteOutcome, ApiError> {
        let result = self
            .collection
            .delete_one(by_id(id))
            .await
            .context("delete assignment")?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}

// ── Submission store ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoSubmissionRepository {
    pub collection: Collection<Submission>,
}

impl MongoSubmissionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(SUBMITTED_ASSIGNMENTS),
        }
    }

    async fn find_all(&self, filter: Document) -> Result<Vec<Submission>, ApiError> {
        let submissions: Vec<Submission> = self
            .collection
            .find(filter)
            .await
            .context("find submissions")?
            .try_collect()
            .await
            .context("read submissions cursor")?;
        Ok(submissions)
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn create(&self, submission: &NewSubmission) -> Result<InsertOutcome, ApiError> {
        let result = self
            .collection
            .clone_with_type::<NewSubmission>()
            .insert_one(submission)
            .await
            .context("insert submission")?;
        inserted_object_id(result)
    }

    async fn list_by_submitter(&self, email: &str) -> Result<Vec<Submission>, ApiError> {
        self.find_all(doc! { "examineeEmail": email }).await
    }

    async fn list_pending(&self) -> Result<Vec<Submission>, ApiError> {
        self.find_all(doc! { "status": PENDING_STATUS }).await
    }
}
