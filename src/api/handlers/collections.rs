use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::api::extractors::identity::CallerId;
use crate::domain::collection::Collection;
use crate::domain::services::{policy, visibility};
use crate::error::AppError;
use crate::state::AppState;

/// `/api/{collection}`: list and create.
pub async fn collection_request(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    method: Method,
    CallerId(caller): CallerId,
    payload: Bytes,
) -> Response {
    let result = dispatch(&state, &segment, None, &method, caller.as_deref(), &payload).await;
    respond_after_latency(&state, result).await
}

/// `/api/{collection}/{id}`: single-resource get, update and delete.
pub async fn resource_request(
    State(state): State<Arc<AppState>>,
    Path((segment, id)): Path<(String, String)>,
    method: Method,
    CallerId(caller): CallerId,
    payload: Bytes,
) -> Response {
    let result = dispatch(&state, &segment, Some(&id), &method, caller.as_deref(), &payload).await;
    respond_after_latency(&state, result).await
}

async fn dispatch(
    state: &AppState,
    segment: &str,
    resource_id: Option<&str>,
    method: &Method,
    caller: Option<&str>,
    payload: &Bytes,
) -> Result<Response, AppError> {
    let collection = Collection::from_path_segment(segment)
        .ok_or_else(|| AppError::NotFound(format!("Unknown API collection: {segment}")))?;

    let body = parse_body(payload)?;

    // One request at a time owns the document between load and save.
    let _gate = state.store_gate.lock().await;
    let mut db = state.store.load().await?;

    policy::check(&db, caller, method, collection, resource_id, body.as_ref())?;
    let user = caller.and_then(|id| db.user_by_id(id)).cloned();

    match method.as_str() {
        "GET" => match resource_id {
            Some(id) => Ok(json_response(StatusCode::OK, db.find(collection, id)?)),
            None => Ok(json_response(
                StatusCode::OK,
                visibility::scoped_list(&db, collection, user.as_ref())?,
            )),
        },
        "POST" => {
            let mut body = body.ok_or_else(|| AppError::Validation("Request body required".to_string()))?;
            if collection == Collection::Materials {
                stamp_caller_organization(&mut body, user.as_ref().and_then(|u| u.organization_id.as_deref()));
            }
            let created = db.insert(collection, body)?;
            state.store.save(&db).await?;
            info!("Created {} item {}", collection.key(), created["id"].as_str().unwrap_or_default());
            Ok(json_response(StatusCode::CREATED, created))
        }
        "PUT" => {
            let id = resource_id.ok_or_else(|| AppError::Validation("Resource ID required for PUT".to_string()))?;
            let body = body.ok_or_else(|| AppError::Validation("Request body required".to_string()))?;
            let updated = db.replace(collection, id, body)?;
            state.store.save(&db).await?;
            info!("Updated {} item {}", collection.key(), id);
            Ok(json_response(StatusCode::OK, updated))
        }
        "DELETE" => {
            let id = resource_id.ok_or_else(|| AppError::Validation("Resource ID required for DELETE".to_string()))?;
            db.remove(collection, id)?;
            state.store.save(&db).await?;
            info!("Deleted {} item {}", collection.key(), id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

fn parse_body(payload: &Bytes) -> Result<Option<Value>, AppError> {
    if payload.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(payload)
        .map(Some)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
}

/// Materials created without an organization inherit the caller's.
fn stamp_caller_organization(body: &mut Value, organization_id: Option<&str>) {
    let Some(org_id) = organization_id else { return };
    if let Value::Object(map) = body {
        let missing = match map.get("organizationId") {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            _ => false,
        };
        if missing {
            map.insert("organizationId".to_string(), Value::String(org_id.to_string()));
        }
    }
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

/// Emulated network latency: every outcome, success or error, is held
/// back by a uniformly random delay.
async fn respond_after_latency(state: &AppState, result: Result<Response, AppError>) -> Response {
    let min = state.config.latency_min_ms;
    let max = state.config.latency_max_ms.max(min);
    if max > 0 {
        let delay = rand::thread_rng().gen_range(min..=max);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    result.unwrap_or_else(|e| e.into_response())
}
