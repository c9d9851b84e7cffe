//! Request handlers for the idea REST surface.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::storage::{IdeaPatch, NewIdea};

use super::error::ApiError;
use super::AppState;

const IDEAS_ALLOW: &str = "GET, POST, PUT, DELETE";
const IDEA_ALLOW: &str = "GET, PUT, DELETE";
const HEALTH_ALLOW: &str = "GET";

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "🚀 Idea Manager API funcionando correctamente",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "ideas": "/api/ideas",
            "health": "/api/health",
        },
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_ideas(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = state.store.lock().await;
    let ideas = store.list();

    Json(json!({
        "success": true,
        "data": ideas,
        "count": ideas.len(),
    }))
}

pub async fn get_idea(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::InvalidInput("ID inválido".to_string()))?;

    let store = state.store.lock().await;
    let idea = store.get(id)?;

    Ok(Json(json!({ "success": true, "data": idea })))
}

pub async fn create_idea(
    State(state): State<AppState>,
    payload: Result<Json<NewIdea>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::Internal {
        detail: state.debug.then(|| rejection.body_text()),
    })?;

    let mut store = state.store.lock().await;
    let idea = store.create(payload)?;
    tracing::info!(id = idea.id, "idea creada");

    let body = Json(json!({
        "success": true,
        "message": "Idea creada exitosamente",
        "data": idea,
    }));
    Ok((StatusCode::CREATED, body).into_response())
}

pub async fn update_idea(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<IdeaPatch>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::InvalidInput("ID inválido".to_string()))?;
    let Json(patch) = payload.map_err(|rejection| ApiError::Internal {
        detail: state.debug.then(|| rejection.body_text()),
    })?;

    let mut store = state.store.lock().await;
    let idea = store.update(id, patch)?;
    tracing::info!(id = idea.id, "idea actualizada");

    Ok(Json(json!({
        "success": true,
        "message": "Idea actualizada exitosamente",
        "data": idea,
    })))
}

pub async fn delete_idea(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::InvalidInput("ID inválido".to_string()))?;

    let mut store = state.store.lock().await;
    let idea = store.delete(id)?;
    tracing::info!(id = idea.id, "idea eliminada");

    Ok(Json(json!({
        "success": true,
        "message": "Idea eliminada exitosamente",
        "data": idea,
    })))
}

// Collection-level PUT/DELETE mirror the query-parameter contract of the
// original serverless adapter: without an id they are a 400, not a 404.

pub async fn update_missing_id() -> ApiError {
    ApiError::InvalidInput("ID es requerido para actualizar".to_string())
}

pub async fn delete_missing_id() -> ApiError {
    ApiError::InvalidInput("ID es requerido para eliminar".to_string())
}

pub async fn endpoint_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Endpoint no encontrado",
            "availableEndpoints": [
                "GET /",
                "GET /api/health",
                "GET /api/ideas",
                "GET /api/ideas/{id}",
                "POST /api/ideas",
                "PUT /api/ideas/{id}",
                "DELETE /api/ideas/{id}",
            ],
        })),
    )
        .into_response()
}

pub async fn ideas_method_not_allowed() -> Response {
    method_not_allowed(IDEAS_ALLOW)
}

pub async fn idea_method_not_allowed() -> Response {
    method_not_allowed(IDEA_ALLOW)
}

pub async fn health_method_not_allowed() -> Response {
    method_not_allowed(HEALTH_ALLOW)
}

fn method_not_allowed(allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        Json(json!({ "success": false, "message": "Método no permitido" })),
    )
        .into_response()
}
