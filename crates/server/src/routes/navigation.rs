use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use db::models::nav_item::{CreateNavItem, NavItem, UpdateNavItem};
use services::services::{
    ordering::{self, NavItemStore},
    validate,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store(state: &AppState) -> NavItemStore {
    NavItemStore {
        pool: state.db.pool.clone(),
    }
}

fn check(title: &str, path: &str) -> Result<(), ApiError> {
    validate::required("title", title).map_err(ApiError::Validation)?;
    validate::required("path", path).map_err(ApiError::Validation)
}

pub async fn list_nav_items(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<NavItem>>>, ApiError> {
    let items = ordering::list_ordered(&store(&state)).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_nav_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateNavItem>,
) -> Result<ResponseJson<ApiResponse<NavItem>>, ApiError> {
    check(&payload.title, &payload.path)?;
    let position = ordering::next_position(&store(&state)).await?;
    let item = NavItem::create(&state.db.pool, &payload, Uuid::new_v4(), position).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_nav_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNavItem>,
) -> Result<ResponseJson<ApiResponse<NavItem>>, ApiError> {
    check(&payload.title, &payload.path)?;
    let item = NavItem::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn move_nav_item_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<NavItem>>>, ApiError> {
    let store = store(&state);
    ordering::move_up(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn move_nav_item_down(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<NavItem>>>, ApiError> {
    let store = store(&state);
    ordering::move_down(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn delete_nav_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    ordering::delete(&store(&state), id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/navigation",
            get(list_nav_items).post(create_nav_item),
        )
        .route(
            "/admin/navigation/{id}",
            put(update_nav_item).delete(delete_nav_item),
        )
        .route("/admin/navigation/{id}/move-up", post(move_nav_item_up))
        .route("/admin/navigation/{id}/move-down", post(move_nav_item_down))
}
