pub mod approver;
pub mod errors;
pub mod reviewer;
pub mod submitter;

use axum::routing::{get, post, put};
use axum::Router;

use crate::auth::session;
use crate::state::AppState;

/// Build the full API router.
///
/// The route shape mirrors the dashboards this service backs: one namespace
/// per role, with decision endpoints as `PUT` verbs on the document.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Session
        .route("/api/auth/login", post(session::login_handler))
        .route("/api/auth/me", get(session::me_handler))
        .route("/api/auth/logout", post(session::logout_handler))
        // Submitter
        .route(
            "/api/submitter/documents",
            get(submitter::list_documents).post(submitter::create_document),
        )
        .route("/api/submitter/documents/summary", get(submitter::summary))
        .route(
            "/api/submitter/documents/{id}",
            get(submitter::get_document).put(submitter::update_document),
        )
        // Reviewer
        .route("/api/reviewer/documents/pending", get(reviewer::pending))
        .route("/api/reviewer/documents/reviewed", get(reviewer::reviewed))
        .route("/api/reviewer/documents/{id}", get(reviewer::get_document))
        .route("/api/reviewer/documents/{id}/approve", put(reviewer::approve))
        .route("/api/reviewer/documents/{id}/reject", put(reviewer::reject))
        // Approver
        .route("/api/approver/documents/pending", get(approver::pending))
        .route("/api/approver/documents/finalized", get(approver::finalized))
        .route("/api/approver/documents/{id}", get(approver::get_document))
        .route("/api/approver/documents/{id}/finalize", put(approver::finalize))
        .route("/api/approver/documents/{id}/archive", put(approver::archive))
        .route("/api/approver/documents/{id}/reject", put(approver::reject))
        .with_state(state)
}
