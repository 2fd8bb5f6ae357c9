use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::{
    appointments::AppointmentError, contact::ContactError, ordering::OrderingError,
    settings::SettingsError, storage::StorageError,
};
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Ordering(#[from] OrderingError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Appointment(#[from] AppointmentError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::Ordering(OrderingError::Validation(_))
            | ApiError::Settings(SettingsError::Validation(_))
            | ApiError::Appointment(AppointmentError::Validation(_))
            | ApiError::Contact(ContactError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::NotFound
            | ApiError::Ordering(OrderingError::NotFound)
            | ApiError::Settings(SettingsError::NotFound)
            | ApiError::Appointment(AppointmentError::NotFound)
            | ApiError::Appointment(AppointmentError::SlotNotFound) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
