use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use db::models::service_card::{CreateServiceCard, ServiceCard, UpdateServiceCard};
use services::services::{
    ordering::{self, ServiceCardStore},
    validate,
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store(state: &AppState) -> ServiceCardStore {
    ServiceCardStore {
        pool: state.db.pool.clone(),
    }
}

pub async fn list_service_cards(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<ServiceCard>>>, ApiError> {
    let items = ordering::list_ordered(&store(&state)).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_service_card(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceCard>,
) -> Result<ResponseJson<ApiResponse<ServiceCard>>, ApiError> {
    validate::required("title", &payload.title).map_err(ApiError::Validation)?;
    let position = ordering::next_position(&store(&state)).await?;
    let card = ServiceCard::create(&state.db.pool, &payload, Uuid::new_v4(), position).await?;
    Ok(ResponseJson(ApiResponse::success(card)))
}

pub async fn update_service_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceCard>,
) -> Result<ResponseJson<ApiResponse<ServiceCard>>, ApiError> {
    validate::required("title", &payload.title).map_err(ApiError::Validation)?;
    let card = ServiceCard::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(card)))
}

pub async fn move_service_card_up(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<ServiceCard>>>, ApiError> {
    let store = store(&state);
    ordering::move_up(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn move_service_card_down(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<ServiceCard>>>, ApiError> {
    let store = store(&state);
    ordering::move_down(&store, id).await?;
    let items = ordering::list_ordered(&store).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn delete_service_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    ordering::delete(&store(&state), id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/services",
            get(list_service_cards).post(create_service_card),
        )
        .route(
            "/admin/services/{id}",
            put(update_service_card).delete(delete_service_card),
        )
        .route("/admin/services/{id}/move-up", post(move_service_card_up))
        .route(
            "/admin/services/{id}/move-down",
            post(move_service_card_down),
        )
}
