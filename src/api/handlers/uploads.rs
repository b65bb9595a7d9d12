use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::upload_store::generate_name;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Accepts a multipart form with a `file` field and stores it under a
/// freshly generated name. Other fields are ignored.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart
        .map_err(|e| ApiError::missing_file(format!("Expected a multipart form: {e}")))?;

    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::missing_file(format!("Invalid multipart data: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // A `file` field without a (non-empty) filename is a plain form value
        let Some(original_name) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
        else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::missing_file(format!("Failed to read file: {e}")))?;
        upload = Some((original_name, data));
        break;
    }

    let (original_name, data) =
        upload.ok_or_else(|| ApiError::missing_file("file field is required"))?;

    let name = generate_name(&original_name);
    let byte_size = data.len();
    let stored = state
        .uploads
        .put(&name, data)
        .await
        .map_err(ApiError::upload)?;

    tracing::debug!(
        original_name = %original_name,
        stored_as = %stored.storage_path.display(),
        byte_size,
        "Stored upload"
    );

    Ok(Json(UploadResponse {
        url: stored.public_url,
    }))
}
