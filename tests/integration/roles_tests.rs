use crate::common::{TEST_TOKEN, create_test_client};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use superclouds::prelude::*;

#[tokio::test]
async fn test_list_roles() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/roles")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"roles":["ADMIN","MODIFY","VIEW"]}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), TEST_TOKEN);
    let roles = client.list_roles().await.unwrap();

    mock.assert_async().await;
    assert_eq!(roles.roles.len(), 3);
    assert!(roles.contains("MODIFY"));
}

#[tokio::test]
async fn test_update_user_role_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/role")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"email": "user@example.com", "role": "MODIFY"})))
        .with_status(200)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), TEST_TOKEN);
    client
        .update_user_role(&UpdateUserRoleRequest::new("user@example.com", "MODIFY"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_user_role_forbidden() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/users/role")
        .with_status(403)
        .with_body(r#"{"message":"forbidden"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), TEST_TOKEN);
    let err = client
        .update_user_role(&UpdateUserRoleRequest::new("user@example.com", "ROOT"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(err.to_string(), "failed to update user role: 403 Forbidden");
}
