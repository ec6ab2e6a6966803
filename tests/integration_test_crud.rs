mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_worker_then_get_round_trip() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app.post("/api/workers", Some(admin.as_str()), json!({"name": "X"})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    let id = created["id"].as_str().expect("generated id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "X");

    let res = app.get(&format!("/api/workers/{}", id), Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = parse_body(res).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_client_with_explicit_id_is_preserved() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app
        .post(
            "/api/clients",
            Some(admin.as_str()),
            json!({"id": "client-custom", "name": "XYZ GmbH", "company": "XYZ GmbH"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    assert_eq!(created["id"], "client-custom");

    let res = app.get("/api/clients/client-custom", Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_preserves_path_id_over_body_id() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app.post("/api/workers", Some(admin.as_str()), json!({"name": "Before"})).await;
    let created = parse_body(res).await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = app
        .put(
            &format!("/api/workers/{}", id),
            Some(admin.as_str()),
            json!({"id": "some-other-id", "name": "After", "phone": "+4911111"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "After");

    // nothing was stored under the body's id
    let res = app.get("/api/workers/some-other-id", Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_is_a_wholesale_replace() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app
        .post("/api/workers", Some(admin.as_str()), json!({"name": "Keep", "phone": "+491234"}))
        .await;
    let created = parse_body(res).await;
    let id = created["id"].as_str().unwrap().to_string();

    // phone omitted from the replacement body -> gone, not merged
    let res = app.put(&format!("/api/workers/{}", id), Some(admin.as_str()), json!({"name": "Keep"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["phone"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_delete_missing_id_returns_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app.delete("/api/materials/no-such-id", Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "materials with id no-such-id not found");
}

#[tokio::test]
async fn test_get_after_delete_returns_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    let res = app.post("/api/workers", Some(admin.as_str()), json!({"name": "Ephemeral"})).await;
    let id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.delete(&format!("/api/workers/{}", id), Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty(), "delete response must have an empty body");

    let res = app.get(&format!("/api/workers/{}", id), Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assignment_round_trip() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;
    let db = app.db().await;
    let site_b = app.site_id_by_prefix("Site B").await;
    let worker = db.workers.iter().find(|w| w.name == "John Doe").unwrap().id.clone();

    let res = app
        .post(
            "/api/assignments",
            Some(admin.as_str()),
            json!({
                "siteId": site_b,
                "workerId": worker,
                "role": "site_manager",
                "assignedDate": "2025-04-01",
                "startDate": "2025-04-01"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    assert_eq!(created["siteId"], site_b.as_str());
    assert_eq!(created["assignedDate"], "2025-04-01");

    let id = created["id"].as_str().unwrap();
    let res = app.get(&format!("/api/assignments/{}", id), Some(admin.as_str())).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await, created);
}

#[tokio::test]
async fn test_malformed_payload_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_id().await;

    // sites require a name and an address
    let res = app.post("/api/sites", Some(admin.as_str()), json!({"city": "Nowhere"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["message"].as_str().unwrap().contains("sites"));
}
