use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// `difficulty` filter value that matches every assignment. Never stored.
pub const ALL_DIFFICULTIES: &str = "all";

/// Status given to every new submission.
pub const PENDING_STATUS: &str = "pending";

/// Assignment fields a list filter may match on, besides `difficulty`.
pub const FILTERABLE_FIELDS: &[&str] = &[
    "title",
    "description",
    "marks",
    "thumbnailUrl",
    "dueDate",
    "creatorEmail",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

// ── Assignment ───────────────────────────────────────────────────────────────

/// Stored assignment document (`assignments` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Email of the author. Empty for documents written before it was stamped.
    #[serde(default)]
    pub creator_email: String,
}

/// Client-supplied fields of a new assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignmentDraft {
    pub title: String,
    pub difficulty: Difficulty,
    pub description: Option<String>,
    pub marks: Option<u32>,
    pub thumbnail_url: Option<String>,
    pub due_date: Option<String>,
}

impl AssignmentDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_title(&self.title)
    }
}

fn check_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::InvalidDocument("title must not be empty".to_owned()));
    }
    Ok(())
}

/// Assignment ready to insert: the draft plus the author stamped by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
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

impl NewAssignment {
    pub fn from_draft(draft: AssignmentDraft, creator_email: String) -> Self {
        Self {
            title: draft.title,
            difficulty: draft.difficulty,
            description: draft.description,
            marks: draft.marks,
            thumbnail_url: draft.thumbnail_url,
            due_date: draft.due_date,
            creator_email,
        }
    }

    pub fn into_assignment(self, id: ObjectId) -> Assignment {
        Assignment {
            id,
            title: self.title,
            difficulty: self.difficulty,
            description: self.description,
            marks: self.marks,
            thumbnail_url: self.thumbnail_url,
            due_date: self.due_date,
            creator_email: self.creator_email,
        }
    }
}

/// Shallow replacement of assignment fields. `creatorEmail` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl AssignmentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A patch must change something and may not blank out the title.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.is_empty() {
            return Err(ApiError::InvalidDocument("patch has no fields".to_owned()));
        }
        match &self.title {
            Some(title) => check_title(title),
            None => Ok(()),
        }
    }
}

/// Parsed `POST /assignments` filter.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentQuery {
    /// `difficulty == "all"`: every assignment, other fields ignored.
    All,
    /// Field-for-field equality on the given (camelCase) fields.
    Matching(Map<String, Value>),
}

impl AssignmentQuery {
    pub fn parse(mut body: Map<String, Value>) -> Result<Self, ApiError> {
        match body.get("difficulty") {
            None => {}
            Some(Value::String(s)) if s == ALL_DIFFICULTIES => return Ok(Self::All),
            Some(Value::String(s)) if Difficulty::parse(s).is_some() => {}
            Some(other) => {
                return Err(ApiError::InvalidDocument(format!(
                    "unknown difficulty {other}"
                )));
            }
        }

        let difficulty = body.remove("difficulty");
        for (field, value) in &body {
            if !FILTERABLE_FIELDS.contains(&field.as_str()) {
                return Err(ApiError::InvalidDocument(format!(
                    "cannot filter on `{field}`"
                )));
            }
            if !matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_)) {
                return Err(ApiError::InvalidDocument(format!(
                    "filter on `{field}` must be a string, number or boolean"
                )));
            }
        }
        if let Some(difficulty) = difficulty {
            body.insert("difficulty".to_owned(), difficulty);
        }
        Ok(Self::Matching(body))
    }
}

/// Ownership check shared by the update and delete paths: exact email equality.
pub fn can_modify(requestor_email: &str, owner_email: &str) -> bool {
    requestor_email == owner_email
}

// ── Submission ───────────────────────────────────────────────────────────────

/// Stored submission document (`submittedAssignments` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Hex id of the assignment. Not checked against `assignments`.
    pub assignment_id: String,
    pub examinee_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examinee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: String,
}

/// Client-supplied fields of a submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubmissionDraft {
    pub examinee_email: String,
    pub examinee_name: Option<String>,
    pub pdf_link: Option<String>,
    pub note: Option<String>,
    /// Older clients send `"pending"` explicitly; nothing else is accepted.
    pub status: Option<String>,
}

impl SubmissionDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.examinee_email.trim().is_empty() {
            return Err(ApiError::InvalidDocument(
                "examineeEmail must not be empty".to_owned(),
            ));
        }
        match self.status.as_deref() {
            None | Some(PENDING_STATUS) => Ok(()),
            Some(other) => Err(ApiError::InvalidDocument(format!(
                "a new submission must be `{PENDING_STATUS}`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
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

impl NewSubmission {
    /// A pending submission of `assignment_id`.
    pub fn pending(assignment_id: ObjectId, draft: SubmissionDraft) -> Self {
        Self {
            assignment_id: assignment_id.to_hex(),
            examinee_email: draft.examinee_email,
            examinee_name: draft.examinee_name,
            pdf_link: draft.pdf_link,
            note: draft.note,
            status: PENDING_STATUS.to_owned(),
        }
    }

    pub fn into_submission(self, id: ObjectId) -> Submission {
        Submission {
            id,
            assignment_id: self.assignment_id,
            examinee_email: self.examinee_email,
            examinee_name: self.examinee_name,
            pdf_link: self.pdf_link,
            note: self.note,
            status: self.status,
        }
    }
}

// ── Write outcomes ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted_id: ObjectId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

// ── Boundary parsing ─────────────────────────────────────────────────────────

/// Strict ObjectId parsing for path segments.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_owned()))
}

/// Validate a schema-less JSON body into a strict record.
pub fn from_body<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidDocument(e.to_string()))
}
