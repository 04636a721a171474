mod common;

use axum::http::StatusCode;

use docuflow::store::models::Document;
use docuflow::workflow::status::DocumentStatus;

#[tokio::test]
async fn full_approval_cycle() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;
    let rita = common::login(&server, "rita").await;
    let avery = common::login(&server, "avery").await;

    // Submitter creates the document straight into review
    let doc = common::create_document(&server, &sam, "Q4 Financial Report", "submitted").await;
    assert_eq!(doc.status, DocumentStatus::Submitted);

    // Reviewer rejects with remarks
    let response = server
        .put(&format!("/api/reviewer/documents/{}/reject", doc.id))
        .add_query_param("remarks", "fix page 2")
        .add_cookie(rita.clone())
        .await;
    response.assert_status_ok();
    let rejected = response.json::<Document>();
    assert_eq!(rejected.status, DocumentStatus::Rejected);
    assert_eq!(rejected.reviewer_remarks.as_deref(), Some("fix page 2"));
    assert!(rejected.reviewed_at.is_some());

    // Submitter fixes it up and resubmits
    let response = server
        .put(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam.clone())
        .json(&serde_json::json!({
            "remarks": "page 2 redone",
            "status": "submitted",
        }))
        .await;
    response.assert_status_ok();
    let resubmitted = response.json::<Document>();
    assert_eq!(resubmitted.status, DocumentStatus::Submitted);

    // Reviewer approves
    let response = server
        .put(&format!("/api/reviewer/documents/{}/approve", doc.id))
        .add_cookie(rita.clone())
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Document>().status, DocumentStatus::Approved);

    // Approver finalizes
    let response = server
        .put(&format!("/api/approver/documents/{}/finalize", doc.id))
        .add_query_param("remarks", "cleared for distribution")
        .add_cookie(avery.clone())
        .await;
    response.assert_status_ok();
    let finalized = response.json::<Document>();
    assert_eq!(finalized.status, DocumentStatus::Finalized);
    assert!(finalized.finalized_at.is_some());
    assert_eq!(
        finalized.approver_remarks.as_deref(),
        Some("cleared for distribution")
    );

    // Any further approver action fails: the document is locked
    let response = server
        .put(&format!("/api/approver/documents/{}/archive", doc.id))
        .add_cookie(avery)
        .await;
    response.assert_status(StatusCode::LOCKED);

    // Owner and creation time survived the whole cycle
    assert_eq!(finalized.owner, doc.owner);
    assert_eq!(finalized.created_at, doc.created_at);
}

#[tokio::test]
async fn draft_edit_roundtrip() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;

    let doc = common::create_document(&server, &sam, "Hiring Plan", "draft").await;
    assert_eq!(doc.status, DocumentStatus::Draft);

    let response = server
        .put(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam.clone())
        .json(&serde_json::json!({
            "title": "Hiring Plan 2026",
            "remarks": "added headcount table",
            "status": "draft",
        }))
        .await;
    response.assert_status_ok();

    let response = server
        .get(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam)
        .await;
    response.assert_status_ok();
    let fetched = response.json::<Document>();
    assert_eq!(fetched.title, "Hiring Plan 2026");
    assert_eq!(fetched.remarks.as_deref(), Some("added headcount table"));
    assert_eq!(fetched.status, DocumentStatus::Draft);
    assert!(fetched.updated_at >= doc.updated_at);
    assert_eq!(fetched.created_at, doc.created_at);
}

#[tokio::test]
async fn edit_without_status_stays_a_draft() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;

    let doc = common::create_document(&server, &sam, "Slow Burn", "draft").await;

    // A metadata-only save must not push the document into review
    let response = server
        .put(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam.clone())
        .json(&serde_json::json!({
            "title": "Slow Burn (revised)",
        }))
        .await;
    response.assert_status_ok();
    let saved = response.json::<Document>();
    assert_eq!(saved.title, "Slow Burn (revised)");
    assert_eq!(saved.status, DocumentStatus::Draft);
}

#[tokio::test]
async fn reject_without_remarks_leaves_document_unchanged() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;
    let rita = common::login(&server, "rita").await;

    let doc = common::create_document(&server, &sam, "Vendor Contract", "submitted").await;

    let response = server
        .put(&format!("/api/reviewer/documents/{}/reject", doc.id))
        .add_cookie(rita.clone())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Blank remarks are not remarks
    let response = server
        .put(&format!("/api/reviewer/documents/{}/reject", doc.id))
        .add_query_param("remarks", "   ")
        .add_cookie(rita.clone())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get(&format!("/api/reviewer/documents/{}", doc.id))
        .add_cookie(rita)
        .await;
    let unchanged = response.json::<Document>();
    assert_eq!(unchanged.status, DocumentStatus::Submitted);
    assert_eq!(unchanged.updated_at, doc.updated_at);
    assert_eq!(unchanged.reviewer_remarks, None);
}

#[tokio::test]
async fn editing_a_document_under_review_is_locked() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;

    let doc = common::create_document(&server, &sam, "In Flight", "submitted").await;

    let response = server
        .put(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam)
        .json(&serde_json::json!({
            "title": "Sneaky Edit",
            "status": "draft",
        }))
        .await;
    response.assert_status(StatusCode::LOCKED);
}

#[tokio::test]
async fn wrong_state_decision_is_a_conflict() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;
    let avery = common::login(&server, "avery").await;

    // Still submitted, not reviewer-approved
    let doc = common::create_document(&server, &sam, "Too Early", "submitted").await;

    let response = server
        .put(&format!("/api/approver/documents/{}/finalize", doc.id))
        .add_cookie(avery)
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn archive_is_terminal_too() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;
    let rita = common::login(&server, "rita").await;
    let avery = common::login(&server, "avery").await;

    let doc = common::create_document(&server, &sam, "Old Policy", "submitted").await;
    server
        .put(&format!("/api/reviewer/documents/{}/approve", doc.id))
        .add_cookie(rita.clone())
        .await
        .assert_status_ok();
    server
        .put(&format!("/api/approver/documents/{}/archive", doc.id))
        .add_cookie(avery.clone())
        .await
        .assert_status_ok();

    // Neither role can touch it now
    server
        .put(&format!("/api/approver/documents/{}/finalize", doc.id))
        .add_cookie(avery)
        .await
        .assert_status(StatusCode::LOCKED);
    server
        .put(&format!("/api/reviewer/documents/{}/approve", doc.id))
        .add_cookie(rita)
        .await
        .assert_status(StatusCode::LOCKED);
    server
        .put(&format!("/api/submitter/documents/{}", doc.id))
        .add_cookie(sam)
        .json(&serde_json::json!({"title": "Revived", "status": "draft"}))
        .await
        .assert_status(StatusCode::LOCKED);
}

#[tokio::test]
async fn unknown_document_is_not_found() {
    let server = common::test_server();
    let rita = common::login(&server, "rita").await;

    let response = server
        .put("/api/reviewer/documents/00000000-0000-0000-0000-000000000000/approve")
        .add_cookie(rita)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let server = common::test_server();
    let sam = common::login(&server, "sam").await;

    let response = server
        .post("/api/submitter/documents")
        .add_cookie(sam)
        .json(&serde_json::json!({
            "title": "   ",
            "fileRef": "files/x.pdf",
            "status": "draft",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
