use serde_json::json;

use assignhub_api::domain::types::PENDING_STATUS;
use assignhub_api::error::ApiError;
use assignhub_api::usecase::submission::{
    ListOwnSubmissionsUseCase, ListPendingSubmissionsUseCase, SubmitAssignmentUseCase,
};
use mongodb::bson::oid::ObjectId;

use crate::helpers::{InMemorySubmissionRepo, test_submission};

// ── SubmitAssignmentUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_store_pending_submission() {
    let repo = InMemorySubmissionRepo::default();
    let assignment_id = ObjectId::new();

    let outcome = SubmitAssignmentUseCase { repo: &repo }
        .execute(
            &assignment_id.to_hex(),
            json!({"examineeEmail": "s@x.com", "pdfLink": "https://f/answer.pdf", "note": "done"}),
        )
        .await
        .unwrap();

    let docs = repo.docs.lock().unwrap();
    assert_eq!(docs.len(), 1);
    let stored = &docs[0];
    assert_eq!(stored.id, outcome.inserted_id);
    assert_eq!(stored.assignment_id, assignment_id.to_hex());
    assert_eq!(stored.examinee_email, "s@x.com");
    assert_eq!(stored.status, PENDING_STATUS);
}

#[tokio::test]
async fn should_accept_submission_for_unknown_assignment() {
    let repo = InMemorySubmissionRepo::default();

    // No referential check against the assignments collection.
    let result = SubmitAssignmentUseCase { repo: &repo }
        .execute(&ObjectId::new().to_hex(), json!({"examineeEmail": "s@x.com"}))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn should_reject_submission_with_malformed_assignment_id() {
    let repo = InMemorySubmissionRepo::default();

    let result = SubmitAssignmentUseCase { repo: &repo }
        .execute("abc", json!({"examineeEmail": "s@x.com"}))
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidId(_))),
        "expected InvalidId, got {result:?}"
    );
}

#[tokio::test]
async fn should_accept_explicit_pending_status() {
    let repo = InMemorySubmissionRepo::default();

    let result = SubmitAssignmentUseCase { repo: &repo }
        .execute(
            &ObjectId::new().to_hex(),
            json!({"examineeEmail": "s@x.com", "status": "pending"}),
        )
        .await;

    assert!(result.is_ok(), "expected Ok, got {result:?}");
    assert_eq!(repo.docs.lock().unwrap()[0].status, PENDING_STATUS);
}

#[tokio::test]
async fn should_reject_non_pending_status() {
    let repo = InMemorySubmissionRepo::default();

    let result = SubmitAssignmentUseCase { repo: &repo }
        .execute(
            &ObjectId::new().to_hex(),
            json!({"examineeEmail": "s@x.com", "status": "completed"}),
        )
        .await;

    assert!(matches!(result, Err(ApiError::InvalidDocument(_))));
    assert!(repo.docs.lock().unwrap().is_empty());
}

// ── ListOwnSubmissionsUseCase ────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_callers_submissions() {
    let repo = InMemorySubmissionRepo::with(vec![
        test_submission("s@x.com", PENDING_STATUS),
        test_submission("t@x.com", PENDING_STATUS),
        test_submission("s@x.com", "completed"),
    ]);

    let own = ListOwnSubmissionsUseCase { repo: &repo }
        .execute("s@x.com")
        .await
        .unwrap();

    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|s| s.examinee_email == "s@x.com"));
}

// ── ListPendingSubmissionsUseCase ────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_pending_submissions() {
    let repo = InMemorySubmissionRepo::with(vec![
        test_submission("s@x.com", PENDING_STATUS),
        test_submission("t@x.com", "completed"),
        test_submission("u@x.com", PENDING_STATUS),
    ]);

    let pending = ListPendingSubmissionsUseCase { repo: &repo }
        .execute()
        .await
        .unwrap();

    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|s| s.status == PENDING_STATUS));
}
