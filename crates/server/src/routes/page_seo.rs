use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{delete, get},
};
use db::models::page_seo::{PageSeo, UpsertPageSeo};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn list_page_seo(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<PageSeo>>>, ApiError> {
    let records = PageSeo::list(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(records)))
}

/// One record per page path; saving an existing path overwrites it.
pub async fn upsert_page_seo(
    State(state): State<AppState>,
    Json(payload): Json<UpsertPageSeo>,
) -> Result<ResponseJson<ApiResponse<PageSeo>>, ApiError> {
    let saved = state.settings.save_page_seo(payload).await?;
    Ok(ResponseJson(ApiResponse::success(saved)))
}

pub async fn delete_page_seo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state.settings.delete_page_seo(id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/page-seo", get(list_page_seo).put(upsert_page_seo))
        .route("/admin/page-seo/{id}", delete(delete_page_seo))
}
