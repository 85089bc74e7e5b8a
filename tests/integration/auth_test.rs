//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_and_login() {
    let app = TestApp::new().await;
    let token = app.register_and_login("auth@example.com").await;
    assert!(!token.is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    app.register_and_login("dup@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "dup@example.com",
                "password": "tidal-otter-reads-papers-42",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_and_login("wrongpw@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "wrongpw@example.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.register_and_login("me@example.com").await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "me@example.com");
}
