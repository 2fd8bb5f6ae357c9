use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use db::models::{
    appointment::{Appointment, AppointmentStatus, CreateAppointment},
    time_slot::TimeSlot,
};
use serde::Deserialize;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

pub async fn book_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointment>,
) -> Result<ResponseJson<ApiResponse<Appointment>>, ApiError> {
    let appointment = state.appointments.book(payload).await?;
    Ok(ResponseJson(ApiResponse::success_with_message(
        appointment,
        "Appointment request received".to_string(),
    )))
}

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
}

pub async fn list_time_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<TimeSlot>>>, ApiError> {
    let slots = state.appointments.slots_for_date(query.date).await?;
    Ok(ResponseJson(ApiResponse::success(slots)))
}

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Appointment>>>, ApiError> {
    let appointments = state.appointments.list().await?;
    Ok(ResponseJson(ApiResponse::success(appointments)))
}

#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: AppointmentStatus,
}

/// Status moves are unconditional; confirm, cancel and re-confirm are all
/// allowed, last write wins. The client refetches the list afterwards.
pub async fn set_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatus>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    state.appointments.set_status(id, payload.status).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(book_appointment))
        .route("/time-slots", get(list_time_slots))
        .route("/admin/appointments", get(list_appointments))
        .route(
            "/admin/appointments/{id}/status",
            put(set_appointment_status),
        )
}
