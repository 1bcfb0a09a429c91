use httpmock::prelude::*;
use profilectl::api::ProfileClient;
use profilectl::error::AppError;
use profilectl::profile::{ProfileUpdater, UpdatePayload};
use profilectl::session::UserId;
use serde_json::json;

fn basic_payload() -> UpdatePayload {
    UpdatePayload::Basic {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
    }
}

#[tokio::test]
async fn puts_payload_with_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PUT)
            .path("/profile")
            .header("authorization", "Bearer tok-123")
            .json_body(json!({ "name": "Ana", "email": "ana@example.com" }));
        then.status(200).json_body(json!({
            "id": "5d0c",
            "name": "Ana",
            "email": "ana@example.com",
            "avatar_url": null,
            "updated_at": "2020-05-01T10:00:00.000Z"
        }));
    });

    let client = ProfileClient::new(server.base_url());
    let user = client
        .update_profile(&basic_payload(), "tok-123")
        .await
        .expect("update should succeed");

    mock.assert();
    assert_eq!(user.id, UserId::Text("5d0c".to_string()));
    assert_eq!(user.name, "Ana");
    assert!(user.avatar_url.is_none());
    assert!(user.extra.contains_key("updated_at"));
}

#[tokio::test]
async fn sends_password_group_when_changing_password() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PUT).path("/profile").json_body(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "old_password": "abc123",
            "password": "secret1",
            "password_confirmation": "secret1"
        }));
        then.status(200)
            .json_body(json!({ "id": 1, "name": "Ana", "email": "ana@example.com" }));
    });

    let payload = UpdatePayload::WithPasswordChange {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        old_password: "abc123".to_string(),
        password: "secret1".to_string(),
        password_confirmation: "secret1".to_string(),
    };

    let client = ProfileClient::new(server.base_url());
    let updater = client.authorized("tok-123");
    let user = updater
        .update_profile(&payload)
        .await
        .expect("update should succeed");

    mock.assert();
    assert_eq!(user.id, UserId::Number(1));
}

#[tokio::test]
async fn unauthorized_maps_to_session_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PUT).path("/profile");
        then.status(401)
            .json_body(json!({ "status": "error", "message": "Invalid JWT token" }));
    });

    let client = ProfileClient::new(server.base_url());
    let error = client
        .update_profile(&basic_payload(), "expired")
        .await
        .expect_err("update should fail");

    mock.assert();
    match error {
        AppError::Session(message) => assert!(message.contains("Invalid JWT token")),
        other => panic!("expected session error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_rejection_maps_to_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::PUT).path("/profile");
        then.status(400).json_body(json!({
            "status": "error",
            "message": "E-mail already in use."
        }));
    });

    let client = ProfileClient::new(server.base_url());
    let error = client
        .update_profile(&basic_payload(), "tok-123")
        .await
        .expect_err("update should fail");

    match error {
        AppError::Api(message) => assert!(message.contains("E-mail already in use.")),
        other => panic!("expected api error, got {other:?}"),
    }
}
