use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use baumate_backend::{
    api::router::create_router,
    config::Config,
    domain::models::database::Database,
    domain::ports::DocumentStore,
    infra::repositories::memory_store::MemoryStore,
    state::AppState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            port: 0,
            store_path: ":memory:".to_string(),
            latency_min_ms: 0,
            latency_max_ms: 0,
        };
        let state = Arc::new(AppState::new(config, Arc::new(MemoryStore::new())));
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        user_id: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header("X-User-Id", user_id);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, user_id: Option<&str>) -> Response {
        self.request(Method::GET, uri, user_id, None).await
    }

    pub async fn post(&self, uri: &str, user_id: Option<&str>, body: Value) -> Response {
        self.request(Method::POST, uri, user_id, Some(body)).await
    }

    pub async fn put(&self, uri: &str, user_id: Option<&str>, body: Value) -> Response {
        self.request(Method::PUT, uri, user_id, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, user_id: Option<&str>) -> Response {
        self.request(Method::DELETE, uri, user_id, None).await
    }

    /// Snapshot of the stored document, seeding it on first access.
    pub async fn db(&self) -> Database {
        self.state.store.load().await.expect("store load failed")
    }

    pub async fn user_id_by_role(&self, role: &str) -> String {
        self.db()
            .await
            .users
            .iter()
            .find(|u| u.role == role)
            .unwrap_or_else(|| panic!("no seeded user with role {role}"))
            .id
            .clone()
    }

    pub async fn admin_id(&self) -> String {
        self.user_id_by_role("org_admin").await
    }

    pub async fn manager_id(&self) -> String {
        self.user_id_by_role("org_manager").await
    }

    pub async fn site_id_by_prefix(&self, prefix: &str) -> String {
        self.db()
            .await
            .sites
            .iter()
            .find(|s| s.name.starts_with(prefix))
            .unwrap_or_else(|| panic!("no seeded site starting with {prefix}"))
            .id
            .clone()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!(
            "Failed to parse JSON: {:?}. Status: {}. Body: {:?}",
            e,
            status,
            String::from_utf8_lossy(&bytes)
        ),
    }
}
