use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use db::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};
use services::services::{
    ordering::{self, ProcessStepStore},
    validate,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store(state: &AppState) -> ProcessStepStore {
    ProcessStepStore {
        pool: state.db.pool.clone(),
    }
}

pub async fn list_process_steps(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<ProcessStep>>>, ApiError> {
    let items = ordering::list_ordered(&store(&state)).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_process_step(
    State(state): State<AppState>,
    Json(payload): Json<CreateProcessStep>,
) -> Result<ResponseJson<ApiResponse<ProcessStep>>, ApiError> {
    validate::required("name", &payload.name).map_err(ApiError::Validation)?;
    let position = ordering::next_position(&store(&state)).await?;
    let step = ProcessStep::create(&state.db.pool, &payload, Uuid::new_v4(), position).await?;
    Ok(ResponseJson(ApiResponse::success(step)))
}

pub async fn update_process_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProcessStep>,
) -> Result<ResponseJson<ApiResponse<ProcessStep>>, ApiError> {
    validate::required("name", &payload.name).map_err(ApiError::Validation)?;
    let step = ProcessStep::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(step)))
}

pub async fn move_process_step_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<ProcessStep>>>, ApiError> {
    let store = store(&state);
    ordering::move_up(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn move_process_step_down(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<ProcessStep>>>, ApiError> {
    let store = store(&state);
    ordering::move_down(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn delete_process_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    ordering::delete(&store(&state), id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/process-steps",
            get(list_process_steps).post(create_process_step),
        )
        .route(
            "/admin/process-steps/{id}",
            put(update_process_step).delete(delete_process_step),
        )
        .route(
            "/admin/process-steps/{id}/move-up",
            post(move_process_step_up),
        )
        .route(
            "/admin/process-steps/{id}/move-down",
            post(move_process_step_down),
        )
}
