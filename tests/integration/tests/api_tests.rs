//! API Integration Tests
//!
//! Each test starts a server on an ephemeral port with its own temporary data
//! file and a mock GitHub API.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use feedback_core::{CommentId, CommentRepository};
use feedback_store::JsonFileCommentRepository;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

const TOKEN: &str = "ghp_integration";

async fn track(server: &TestServer, id: u64) {
    let response = server
        .deliver("issue_comment", &issue_comment_event(id, TRACKED_BODY))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack, json!({ "status": "tracked", "commentId": id }));
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    track(&server, 1).await;

    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["trackedComments"], 1);
    assert!(body["uptimeSeconds"].is_u64());
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Webhook
// ============================================================================

#[tokio::test]
async fn test_tracked_comment_is_stored_without_stats() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;

    let response = server.get("/api/feedback/111").await.unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["id"], 111);
    assert_eq!(record["repository"], REPOSITORY);
    assert_eq!(record["threadId"], 7);
    assert_eq!(record["author"], "detector-bot");
    assert_eq!(record["reactions"], json!([]));
    assert!(record.get("stats").is_none());

    let response = server.get("/api/feedback").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(
        list["comments"][0]["stats"],
        json!({ "total": 0, "positive": 0, "negative": 0, "satisfaction": 0 })
    );
    assert!(list["comments"][0].get("reactions").is_none());
}

#[tokio::test]
async fn test_untracked_comment_is_ignored() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .deliver("issue_comment", &issue_comment_event(222, "LGTM, ship it"))
        .await
        .unwrap();
    let ack: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack["status"], "ignored");

    let response = server.get("/api/feedback").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_review_comment_is_tracked() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .deliver(
            "pull_request_review_comment",
            &review_comment_event(333, 42, TRACKED_BODY),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/feedback/333").await.unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["threadId"], 42);
}

#[tokio::test]
async fn test_bad_signature_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let body = serde_json::to_vec(&issue_comment_event(111, TRACKED_BODY)).unwrap();

    let response = server
        .deliver_raw("issue_comment", body.clone(), Some("sha256=deadbeef"))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error["error"]["code"], "INVALID_SIGNATURE");

    let response = server.deliver_raw("issue_comment", body, None).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/feedback/111").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_signed_malformed_payload_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let body = b"{\"action\": ".to_vec();
    let signature = integration_tests::sign(&body);

    let response = server
        .deliver_raw("issue_comment", body, Some(&signature))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_tracked_comment_is_persisted() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;
    track(&server, 222).await;

    let reloaded = JsonFileCommentRepository::open(server.data_file()).await;
    assert_eq!(reloaded.count().await.unwrap(), 2);
    assert!(reloaded
        .find_by_id(CommentId::new(222))
        .await
        .unwrap()
        .is_some());
}

// ============================================================================
// Refresh
// ============================================================================

#[tokio::test]
async fn test_update_reactions_computes_stats() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/issues/comments/111/reactions"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(reaction_list(&["+1", "+1", "-1"])))
        .expect(1)
        .mount(&server.github)
        .await;

    let response = server
        .post("/api/update-reactions", &UpdateReactionsBody::new(111, TOKEN))
        .await
        .unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        record["stats"],
        json!({ "total": 3, "positive": 2, "negative": 1, "satisfaction": 67 })
    );
    assert_eq!(record["reactions"].as_array().unwrap().len(), 3);
    assert_eq!(record["reactions"][0]["type"], "+1");
    assert_eq!(record["reactions"][0]["user"], "reviewer-0");
    assert!(record["lastUpdatedAt"].is_string());
}

#[tokio::test]
async fn test_update_reactions_for_review_comment() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .deliver(
            "pull_request_review_comment",
            &review_comment_event(333, 42, TRACKED_BODY),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    track(&server, 111).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/widgets/pulls/comments/333/reactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reaction_list(&["+1", "hooray"])))
        .expect(2)
        .mount(&server.github)
        .await;
    server.mock_reactions(REPOSITORY, 111, reaction_list(&["-1"])).await;

    let response = server
        .post("/api/update-reactions", &UpdateReactionsBody::new(333, TOKEN))
        .await
        .unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        record["stats"],
        json!({ "total": 2, "positive": 2, "negative": 0, "satisfaction": 100 })
    );

    let response = server
        .post("/api/update-all", &UpdateAllBody { token: TOKEN })
        .await
        .unwrap();
    let summary: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary, json!({ "total": 2, "updated": 2, "failed": 0 }));

    let saved = std::fs::read_to_string(server.data_file()).unwrap();
    assert!(saved.contains("\"reviewComment\""));
}

#[tokio::test]
async fn test_update_reactions_accepts_string_id() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;
    server
        .mock_reactions(REPOSITORY, 111, reaction_list(&["heart"]))
        .await;

    let response = server
        .post(
            "/api/update-reactions",
            &json!({ "commentId": "111", "token": TOKEN }),
        )
        .await
        .unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["stats"]["positive"], 1);
    assert_eq!(record["stats"]["satisfaction"], 100);
}

#[tokio::test]
async fn test_update_unknown_comment_is_not_found() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;

    let response = server
        .post("/api/update-reactions", &UpdateReactionsBody::new(999, TOKEN))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["error"]["code"], "COMMENT_NOT_FOUND");

    assert!(server.github.received_requests().await.unwrap().is_empty());

    let response = server.get("/api/feedback").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_upstream_failure_keeps_record() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;
    server.mock_reactions_status(REPOSITORY, 111, 500).await;

    let response = server
        .post("/api/update-reactions", &UpdateReactionsBody::new(111, TOKEN))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(error["error"]["code"], "UPSTREAM_ERROR");

    let response = server.get("/api/feedback/111").await.unwrap();
    let record: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(record["reactions"], json!([]));
    assert!(record.get("stats").is_none());
}

#[tokio::test]
async fn test_refresh_request_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_raw("/api/update-reactions", "{\"commentId\": 1,")
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["code"], "INVALID_JSON");

    let response = server
        .post("/api/update-reactions", &json!({ "commentId": 1 }))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");

    let response = server
        .post("/api/update-reactions", &json!({ "token": TOKEN }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.post("/api/update-all", &json!({})).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_all_reports_summary() {
    let server = TestServer::start().await.unwrap();
    track(&server, 111).await;
    track(&server, 222).await;
    track(&server, 333).await;

    server
        .mock_reactions(REPOSITORY, 111, reaction_list(&["+1", "+1", "-1"]))
        .await;
    server.mock_reactions(REPOSITORY, 222, reaction_list(&[])).await;
    server.mock_reactions_status(REPOSITORY, 333, 404).await;

    let response = server
        .post("/api/update-all", &UpdateAllBody { token: TOKEN })
        .await
        .unwrap();
    let summary: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary, json!({ "total": 3, "updated": 2, "failed": 1 }));

    let response = server.get("/api/stats").await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats["totalComments"], 3);
    assert_eq!(stats["commentsWithReactions"], 1);
    assert_eq!(stats["totalReactions"], 3);
    assert_eq!(stats["positiveReactions"], 2);
    assert_eq!(stats["negativeReactions"], 1);
    assert_eq!(stats["overallSatisfaction"], 67);
    assert_eq!(stats["engagementRate"], 33);
}

#[tokio::test]
async fn test_update_all_on_empty_store() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/update-all", &UpdateAllBody { token: TOKEN })
        .await
        .unwrap();
    let summary: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary, json!({ "total": 0, "updated": 0, "failed": 0 }));
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_stats_on_empty_store() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/stats").await.unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        stats,
        json!({
            "totalComments": 0,
            "commentsWithReactions": 0,
            "totalReactions": 0,
            "positiveReactions": 0,
            "negativeReactions": 0,
            "overallSatisfaction": 0,
            "engagementRate": 0
        })
    );
}

#[tokio::test]
async fn test_invalid_path_parameter() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/feedback/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
