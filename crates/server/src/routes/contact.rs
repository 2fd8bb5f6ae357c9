use axum::{Json, Router, extract::State, response::Json as ResponseJson, routing::post};
use services::services::contact::{ContactMessage, DeliveryOutcome};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// Submits the contact form. The response says how the message went out: a
/// real delivery, or a mailto URL the frontend opens itself.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessage>,
) -> Result<ResponseJson<ApiResponse<DeliveryOutcome>>, ApiError> {
    let outcome = state.contact.submit(payload).await?;
    Ok(ResponseJson(ApiResponse::success(outcome)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}
