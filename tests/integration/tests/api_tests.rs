//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DB_HOST, DB_PORT, DB_USER, DB_PASS, DB_NAME
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_ping() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/ping").await.expect("Request failed");
    let ping: PingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ping.message, "pong");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_list_members_after_bootstrap() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/members").await.unwrap();
    let body: DataEnvelope<Vec<MemberResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();

    // Bootstrap seeds an empty table, so there is always at least the roster
    assert!(body.data.len() >= 6);
    for member in &body.data {
        assert!(member.string_fields().iter().all(|f| !f.is_empty()));
        assert!(member.age > 0);
    }
}

#[tokio::test]
async fn test_bootstrap_twice_does_not_duplicate() {
    if !check_test_env().await {
        return;
    }

    let first = TestServer::start().await.unwrap();
    let before: DataEnvelope<Vec<MemberResponse>> =
        assert_json(first.get("/api/members").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    let second = TestServer::start().await.unwrap();
    let after: DataEnvelope<Vec<MemberResponse>> =
        assert_json(second.get("/api/members").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    assert_eq!(before.data.len(), after.data.len());
}

#[tokio::test]
async fn test_get_each_listed_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let list: DataEnvelope<Vec<MemberResponse>> =
        assert_json(server.get("/api/members").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    for member in list.data {
        let response = server
            .get(&format!("/api/members/{}", member.id))
            .await
            .unwrap();
        let one: DataEnvelope<MemberResponse> =
            assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(one.data.id, member.id);
        assert_eq!(one.data.nim, member.nim);
    }
}

#[tokio::test]
async fn test_get_unknown_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    for path in ["/api/members/999999", "/api/members/not-a-number"] {
        let response = server.get(path).await.unwrap();
        let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body.error, "Member not found");
    }
}

// ============================================================================
// CORS Tests
// ============================================================================

#[tokio::test]
async fn test_preflight() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.options("/api/members").await.unwrap();

    let headers = response.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Startup Tests
// ============================================================================

#[tokio::test]
async fn test_unreachable_database_fails_bootstrap() {
    if !check_test_env().await {
        return;
    }

    let mut config = test_config().unwrap();
    config.database.host = "127.0.0.1".to_string();
    config.database.port = 9;

    assert!(TestServer::start_with_config(config).await.is_err());
}
