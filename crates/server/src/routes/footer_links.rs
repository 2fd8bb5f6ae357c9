use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use db::models::footer_link::{CreateFooterLink, FooterLink, UpdateFooterLink};
use services::services::{
    ordering::{self, FooterLinkStore},
    validate,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store(state: &AppState) -> FooterLinkStore {
    FooterLinkStore {
        pool: state.db.pool.clone(),
    }
}

fn check(label: &str, url: &str) -> Result<(), ApiError> {
    validate::required("label", label).map_err(ApiError::Validation)?;
    validate::required("url", url).map_err(ApiError::Validation)
}

pub async fn list_footer_links(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<FooterLink>>>, ApiError> {
    let items = ordering::list_ordered(&store(&state)).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_footer_link(
    State(state): State<AppState>,
    Json(payload): Json<CreateFooterLink>,
) -> Result<ResponseJson<ApiResponse<FooterLink>>, ApiError> {
    check(&payload.label, &payload.url)?;
    let position = ordering::next_position(&store(&state)).await?;
    let link = FooterLink::create(&state.db.pool, &payload, Uuid::new_v4(), position).await?;
    Ok(ResponseJson(ApiResponse::success(link)))
}

pub async fn update_footer_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFooterLink>,
) -> Result<ResponseJson<ApiResponse<FooterLink>>, ApiError> {
    check(&payload.label, &payload.url)?;
    let link = FooterLink::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(link)))
}

pub async fn move_footer_link_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<FooterLink>>>, ApiError> {
    let store = store(&state);
    ordering::move_up(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn move_footer_link_down(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<FooterLink>>>, ApiError> {
    let store = store(&state);
    ordering::move_down(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn delete_footer_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    ordering::delete(&store(&state), id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/footer-links",
            get(list_footer_links).post(create_footer_link),
        )
        .route(
            "/admin/footer-links/{id}",
            put(update_footer_link).delete(delete_footer_link),
        )
        .route("/admin/footer-links/{id}/move-up", post(move_footer_link_up))
        .route(
            "/admin/footer-links/{id}/move-down",
            post(move_footer_link_down),
        )
}
