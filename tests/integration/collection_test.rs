//! Integration tests for the collection hierarchy.

use http::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

async fn create_collection(
    app: &TestApp,
    token: &str,
    name: &str,
    parent_id: Option<&str>,
) -> Value {
    let response = app
        .request(
            "POST",
            "/api/collections",
            Some(serde_json::json!({ "name": name, "parent_id": parent_id })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create failed: {:?}", response.body);
    response.body["data"].clone()
}

async fn create_paper(app: &TestApp, token: &str, title: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/papers",
            Some(serde_json::json!({ "title": title, "authors": ["A. Author"] })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_empty_name_rejected() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-empty@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/collections",
            Some(serde_json::json!({ "name": "   " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_tree_reflects_nesting() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-tree@example.com").await;

    let root = create_collection(&app, &token, "Machine Learning", None).await;
    let root_id = root["id"].as_str().unwrap();
    let child = create_collection(&app, &token, "Transformers", Some(root_id)).await;
    let child_id = child["id"].as_str().unwrap();
    create_collection(&app, &token, "Attention", Some(child_id)).await;

    let response = app
        .request("GET", "/api/collections/tree", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let tree = response.body["data"].as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["name"], "Machine Learning");
    assert_eq!(tree[0]["children"][0]["name"], "Transformers");
    assert_eq!(tree[0]["children"][0]["children"][0]["name"], "Attention");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_move_under_descendant_rejected() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-cycle@example.com").await;

    let root = create_collection(&app, &token, "Root", None).await;
    let root_id = root["id"].as_str().unwrap();
    let child = create_collection(&app, &token, "Child", Some(root_id)).await;
    let child_id = child["id"].as_str().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/collections/{root_id}"),
            Some(serde_json::json!({ "parent_id": child_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_cascades_to_descendants() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-cascade@example.com").await;

    let root = create_collection(&app, &token, "Root", None).await;
    let root_id = root["id"].as_str().unwrap().to_string();
    let child = create_collection(&app, &token, "Child", Some(&root_id)).await;
    let child_id = child["id"].as_str().unwrap().to_string();
    create_collection(&app, &token, "Grandchild", Some(&child_id)).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/collections/{root_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/collections", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_add_paper_twice_conflicts() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-conflict@example.com").await;

    let collection = create_collection(&app, &token, "Reading List", None).await;
    let collection_id = collection["id"].as_str().unwrap().to_string();
    let paper_id = create_paper(&app, &token, "A Paper").await;

    let body = serde_json::json!({ "paper_id": paper_id });
    let path = format!("/api/collections/{collection_id}/papers");

    let first = app
        .request("POST", &path, Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", &path, Some(body), Some(&token)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_remove_missing_association_not_found() {
    let app = TestApp::new().await;
    let token = app.register_and_login("col-remove@example.com").await;

    let collection = create_collection(&app, &token, "Reading List", None).await;
    let collection_id = collection["id"].as_str().unwrap().to_string();
    let paper_id = create_paper(&app, &token, "A Paper").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/collections/{collection_id}/papers/{paper_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
