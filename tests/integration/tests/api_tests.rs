//! API Integration Tests
//!
//! Each test spawns the server in-process on the memory backend, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn join(server: &TestServer, name: &str) {
    let response = server.post("/participants", &JoinBody::new(name)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

async fn messages_for(server: &TestServer, viewer: &str) -> Vec<Message> {
    let response = server.get_as("/messages", viewer).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn participant_names(server: &TestServer) -> Vec<String> {
    let response = server.get("/participants").await.unwrap();
    let participants: Vec<Participant> = assert_json(response, StatusCode::OK).await.unwrap();
    participants.into_iter().map(|p| p.name).collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Participant Tests
// ============================================================================

#[tokio::test]
async fn test_join_then_conflict() {
    let server = TestServer::start().await.unwrap();
    let body = JoinBody::unique();

    let response = server.post("/participants", &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/participants", &body).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_join_is_listed_once_and_announced() {
    let server = TestServer::start().await.unwrap();
    let body = JoinBody::unique();

    server.post("/participants", &body).await.unwrap();
    server.post("/participants", &body).await.unwrap();

    let names = participant_names(&server).await;
    assert_eq!(names.iter().filter(|n| **n == body.name).count(), 1);

    let response = server.get("/participants").await.unwrap();
    let participants: Vec<Participant> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(participants.iter().all(|p| p.last_heartbeat > 0));

    for viewer in [body.name.as_str(), "someone-else"] {
        let messages = messages_for(&server, viewer).await;
        assert!(messages.iter().any(|m| m.from == body.name
            && m.to == "Todos"
            && m.message_type == "status"
            && m.text == "entra na sala..."));
    }
}

#[tokio::test]
async fn test_join_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/participants", &JoinBody::new("")).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert_eq!(
        error.error.details,
        Some(vec!["\"name\" is not allowed to be empty".to_string()])
    );

    let response = server
        .post("/participants", &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .post(format!("{}/participants", server.base_url()))
        .header("content-type", "application/json")
        .body("{\"name\":")
        .send()
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_empty_room_lists_nobody() {
    let server = TestServer::start().await.unwrap();
    assert!(participant_names(&server).await.is_empty());
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_public_message_visible_to_everyone() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let response = server
        .post_as("/messages", "ana", &MessageBody::public("bia", "oi bia"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    for viewer in ["ana", "bia", "carla"] {
        let messages = messages_for(&server, viewer).await;
        let sent = messages.iter().find(|m| m.text == "oi bia").unwrap();
        assert_eq!(sent.from, "ana");
        assert_eq!(sent.message_type, "message");
        assert_eq!(sent.time.len(), 8);
    }
}

#[tokio::test]
async fn test_private_message_hidden_from_third_party() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let response = server
        .post_as("/messages", "ana", &MessageBody::private("bia", "segredo"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    assert!(messages_for(&server, "ana").await.iter().any(|m| m.text == "segredo"));
    assert!(messages_for(&server, "bia").await.iter().any(|m| m.text == "segredo"));
    assert!(messages_for(&server, "carla").await.iter().all(|m| m.text != "segredo"));
}

#[tokio::test]
async fn test_absent_sender_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as("/messages", "ghost", &MessageBody::public("Todos", "boo"))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "UNKNOWN_SENDER");

    assert!(messages_for(&server, "ghost").await.iter().all(|m| m.text != "boo"));
}

#[tokio::test]
async fn test_missing_user_header_is_rejected() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let response = server
        .post("/messages", &MessageBody::public("Todos", "anon"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sender_in_body_is_ignored() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let body = serde_json::json!({
        "from": "bia",
        "to": "Todos",
        "text": "quem sou eu",
        "type": "message",
    });
    let response = server.post_as("/messages", "ana", &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let messages = messages_for(&server, "ana").await;
    let sent = messages.iter().find(|m| m.text == "quem sou eu").unwrap();
    assert_eq!(sent.from, "ana");
}

#[tokio::test]
async fn test_message_validation_reports_every_error() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let response = server
        .post_as("/messages", "ana", &serde_json::json!({ "type": "message" }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    let details = error.error.details.unwrap();
    assert_eq!(details.len(), 2);
    assert_ne!(details[0], details[1]);
}

#[tokio::test]
async fn test_wrong_field_types_report_every_error() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let body = serde_json::json!({ "to": 5, "text": 7, "type": "shout" });
    let response = server.post_as("/messages", "ana", &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert_eq!(
        error.error.details,
        Some(vec![
            "\"to\" must be a string".to_string(),
            "\"text\" must be a string".to_string(),
            "\"type\" must be one of [message, private_message]".to_string(),
        ])
    );

    let response = server
        .post("/participants", &serde_json::json!({ "name": 42 }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(
        error.error.details,
        Some(vec!["\"name\" must be a string".to_string()])
    );
}

#[tokio::test]
async fn test_status_type_cannot_be_submitted() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let body = serde_json::json!({ "to": "Todos", "text": "entra na sala...", "type": "status" });
    let response = server.post_as("/messages", "ana", &body).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_limit_returns_latest_in_order() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    // The join notice is visible too; five more public messages follow it
    for i in 1..=5 {
        let response = server
            .post_as("/messages", "ana", &MessageBody::public("Todos", &i.to_string()))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_as("/messages?limit=2", "bia").await.unwrap();
    let messages: Vec<Message> = assert_json(response, StatusCode::OK).await.unwrap();
    let texts: Vec<_> = messages.into_iter().map(|m| m.text).collect();
    assert_eq!(texts, vec!["4", "5"]);
}

#[tokio::test]
async fn test_invalid_limit_is_422() {
    let server = TestServer::start().await.unwrap();

    for query in ["limit=0", "limit=-2", "limit=abc"] {
        let response = server
            .get_as(&format!("/messages?{query}"), "ana")
            .await
            .unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }
}

// ============================================================================
// Heartbeat Tests
// ============================================================================

#[tokio::test]
async fn test_heartbeat() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;

    let response = server.post_empty_as("/status", "ana").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_heartbeat_unknown_participant() {
    let server = TestServer::start().await.unwrap();
    join(&server, "ana").await;
    let before = messages_for(&server, "ana").await.len();

    let response = server.post_empty_as("/status", "ghost").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(participant_names(&server).await, vec!["ana"]);
    assert_eq!(messages_for(&server, "ana").await.len(), before);
}

// ============================================================================
// Reaper Tests
// ============================================================================

#[tokio::test]
async fn test_idle_participant_is_reaped() {
    let server = TestServer::start_with_reaper(1, 1).await.unwrap();
    join(&server, "idle").await;
    join(&server, "active").await;

    // Keep "active" alive while "idle" goes silent
    for _ in 0..12 {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let response = server.post_empty_as("/status", "active").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    assert_eq!(participant_names(&server).await, vec!["active"]);

    let messages = messages_for(&server, "active").await;
    assert!(messages.iter().any(|m| m.from == "idle"
        && m.to == "Todos"
        && m.message_type == "status"
        && m.text == "sai da sala..."));
    assert!(messages
        .iter()
        .all(|m| !(m.from == "active" && m.text == "sai da sala...")));
}
