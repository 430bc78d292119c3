use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use assignhub_core::health::root;
use assignhub_core::middleware::{cors_layer, request_id_layer};

use crate::handlers::{
    assignment::{
        can_delete, can_update, create_assignment, delete_assignment, get_assignment,
        list_assignments, update_assignment,
    },
    submission::{list_own_submissions, list_pending_submissions, submit_assignment},
    token::{issue_jwt, logout},
};
use crate::middleware::require_token;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Routes behind the `webToken` gate.
    let protected = Router::new()
        .route("/assignments/create", post(create_assignment))
        .route("/assignments/can-update", post(can_update))
        .route("/assignments/can-delete", post(can_delete))
        .route("/assignments/{id}/update", put(update_assignment))
        .route("/assignments/{id}/delete", delete(delete_assignment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        // Health
        .route("/", get(root))
        // Token
        .route("/jwt", post(issue_jwt))
        .route("/logout", get(logout))
        // Assignments
        .route("/assignments", post(list_assignments))
        .route("/assignments/{id}", get(get_assignment))
        // Submissions
        .route("/assignments/{id}/submit", post(submit_assignment))
        .route("/submitted-assignments/self", post(list_own_submissions))
        .route("/submitted-assignments/pending", get(list_pending_submissions))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.allowed_origins)),
        )
        .with_state(state)
}
