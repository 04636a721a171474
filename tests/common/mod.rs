#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use cookie::Cookie;

use docuflow::api;
use docuflow::auth::session::SESSION_COOKIE;
use docuflow::state::AppState;
use docuflow::store::memory::InMemoryDocumentStore;
use docuflow::store::models::Document;
use docuflow::store::DocumentStore;
use docuflow::workflow::engine::WorkflowEngine;

/// Build a test server over a fresh in-memory store.
pub fn test_server() -> TestServer {
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    let engine = Arc::new(WorkflowEngine::new(store));
    let state = AppState { engine };
    TestServer::new(api::router(state))
}

/// Log a demo user in and return their session cookie.
///
/// Demo users authenticate with username == password; the server resolves
/// the role.
pub async fn login(server: &TestServer, username: &str) -> Cookie<'static> {
    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "username": username,
            "password": username,
        }))
        .await;
    response.assert_status_ok();
    response.cookie(SESSION_COOKIE)
}

/// Create a document through the submitter API.
pub async fn create_document(
    server: &TestServer,
    session: &Cookie<'static>,
    title: &str,
    status: &str,
) -> Document {
    let response = server
        .post("/api/submitter/documents")
        .add_cookie(session.clone())
        .json(&serde_json::json!({
            "title": title,
            "fileRef": format!("files/{}.pdf", title.to_lowercase().replace(' ', "-")),
            "fileName": format!("{title}.pdf"),
            "fileType": "application/pdf",
            "status": status,
        }))
        .await;
    response.assert_status_ok();
    response.json::<Document>()
}
