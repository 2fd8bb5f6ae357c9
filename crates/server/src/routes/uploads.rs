use axum::{
    Router,
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Json as ResponseJson, Response},
    routing::{get, post},
};
use services::services::storage::StoredFile;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// Stores an uploaded file and returns the id to reference it by. Fields like
/// `logo_file_id` carry these ids.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ResponseJson<ApiResponse<StoredFile>>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            let stored = state.storage.store(&filename, &bytes).await?;
            return Ok(ResponseJson(ApiResponse::success(stored)));
        }
    }
    Err(ApiError::Validation("missing file field".to_string()))
}

pub async fn serve_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = state
        .storage
        .read(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let mime = mime_guess::from_path(&id).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/uploads", post(upload_file))
        .route("/uploads/{id}", get(serve_file))
}
