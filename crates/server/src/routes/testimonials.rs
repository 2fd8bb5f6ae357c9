use axum::{
    Json, Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use services::services::validate;
use tracing::warn;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn list_testimonials(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<Testimonial>>> {
    match Testimonial::list(&state.db.pool).await {
        Ok(testimonials) => ResponseJson(ApiResponse::success(testimonials)),
        Err(e) => {
            warn!(error = %e, "failed to load testimonials, serving empty");
            ResponseJson(ApiResponse::success(Vec::new()))
        }
    }
}

pub async fn list_testimonials_admin(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Testimonial>>>, ApiError> {
    let testimonials = Testimonial::list(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(testimonials)))
}

fn check(author: &str, quote: &str) -> Result<(), ApiError> {
    validate::required("author", author).map_err(ApiError::Validation)?;
    validate::required("quote", quote).map_err(ApiError::Validation)
}

pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(payload): Json<CreateTestimonial>,
) -> Result<ResponseJson<ApiResponse<Testimonial>>, ApiError> {
    check(&payload.author, &payload.quote)?;
    let testimonial = Testimonial::create(&state.db.pool, &payload, Uuid::new_v4()).await?;
    Ok(ResponseJson(ApiResponse::success(testimonial)))
}

pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTestimonial>,
) -> Result<ResponseJson<ApiResponse<Testimonial>>, ApiError> {
    check(&payload.author, &payload.quote)?;
    let testimonial = Testimonial::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(testimonial)))
}

pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Testimonial::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/testimonials", get(list_testimonials))
        .route(
            "/admin/testimonials",
            get(list_testimonials_admin).post(create_testimonial),
        )
        .route(
            "/admin/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
}
