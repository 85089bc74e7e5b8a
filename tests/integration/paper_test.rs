//! Integration tests for papers and annotations.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_paper_crud_roundtrip() {
    let app = TestApp::new().await;
    let token = app.register_and_login("papers@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/papers",
            Some(serde_json::json!({
                "title": "Attention Is All You Need",
                "authors": ["A. Vaswani"],
                "venue": "NeurIPS",
                "doi": "10.48550/arXiv.1706.03762",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let paper_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PATCH",
            &format!("/api/papers/{paper_id}"),
            Some(serde_json::json!({ "status": "reading" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "reading");

    let response = app.request("GET", "/api/papers", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);

    let response = app
        .request(
            "DELETE",
            &format!("/api/papers/{paper_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/papers/{paper_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_papers_are_owner_scoped() {
    let app = TestApp::new().await;
    let owner = app.register_and_login("owner@example.com").await;
    let other = app.register_and_login("other@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/papers",
            Some(serde_json::json!({ "title": "Private Paper" })),
            Some(&owner),
        )
        .await;
    let paper_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/papers/{paper_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_annotation_lifecycle() {
    let app = TestApp::new().await;
    let token = app.register_and_login("annotate@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/papers",
            Some(serde_json::json!({ "title": "Annotated Paper" })),
            Some(&token),
        )
        .await;
    let paper_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/papers/{paper_id}/annotations"),
            Some(serde_json::json!({
                "content": "Key passage",
                "highlight": "the quick brown fox",
                "kind": "highlight",
                "page_number": 3,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let annotation_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PATCH",
            &format!("/api/papers/{paper_id}/annotations/{annotation_id}"),
            Some(serde_json::json!({ "color": "green" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["color"], "green");

    let response = app
        .request(
            "GET",
            &format!("/api/papers/{paper_id}/annotations"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
}
