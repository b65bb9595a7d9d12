use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use crate::api::response::{ApiError, AppJson};
use crate::storage::models::{InfographicRecord, NewInfographic};
use crate::AppState;

// ============================================================================
// Handlers
// ============================================================================

pub async fn list_infographics(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let records = state.catalog.list().await.map_err(ApiError::storage)?;

    let mut response = Json(records).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    Ok(response)
}

pub async fn create_infographic(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<NewInfographic>,
) -> Result<(StatusCode, Json<InfographicRecord>), ApiError> {
    let record = state
        .catalog
        .insert(payload)
        .await
        .map_err(ApiError::storage)?;

    tracing::debug!(infographic_id = record.id, "Created infographic");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_infographic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // A non-numeric id can never match a row
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::not_found("Infographic not found"))?;

    let deleted = state.catalog.delete(id).await.map_err(ApiError::storage)?;
    if !deleted {
        return Err(ApiError::not_found("Infographic not found"));
    }

    tracing::debug!(infographic_id = id, "Deleted infographic");
    Ok(StatusCode::NO_CONTENT)
}
