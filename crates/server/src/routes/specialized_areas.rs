use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use db::models::specialized_area::{CreateSpecializedArea, SpecializedArea, UpdateSpecializedArea};
use services::services::{
    ordering::{self, SpecializedAreaStore},
    validate,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store(state: &AppState) -> SpecializedAreaStore {
    SpecializedAreaStore {
        pool: state.db.pool.clone(),
    }
}

pub async fn list_specialized_areas(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<SpecializedArea>>>, ApiError> {
    let items = ordering::list_ordered(&store(&state)).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_specialized_area(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpecializedArea>,
) -> Result<ResponseJson<ApiResponse<SpecializedArea>>, ApiError> {
    validate::required("name", &payload.name).map_err(ApiError::Validation)?;
    let position = ordering::next_position(&store(&state)).await?;
    let area = SpecializedArea::create(&state.db.pool, &payload, Uuid::new_v4(), position).await?;
    Ok(ResponseJson(ApiResponse::success(area)))
}

pub async fn update_specialized_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSpecializedArea>,
) -> Result<ResponseJson<ApiResponse<SpecializedArea>>, ApiError> {
    validate::required("name", &payload.name).map_err(ApiError::Validation)?;
    let area = SpecializedArea::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(area)))
}

pub async fn move_specialized_area_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<SpecializedArea>>>, ApiError> {
    let store = store(&state);
    ordering::move_up(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn move_specialized_area_down(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<SpecializedArea>>>, ApiError> {
    let store = store(&state);
    ordering::move_down(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn delete_specialized_area(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    ordering::delete(&store(&state), id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/specialized-areas",
            get(list_specialized_areas).post(create_specialized_area),
        )
        .route(
            "/admin/specialized-areas/{id}",
            put(update_specialized_area).delete(delete_specialized_area),
        )
        .route(
            "/admin/specialized-areas/{id}/move-up",
            post(move_specialized_area_up),
        )
        .route(
            "/admin/specialized-areas/{id}/move-down",
            post(move_specialized_area_down),
        )
}
