//! Booking and the appointment status workflow. Status transitions are
//! unconditional: any state may move to any other state, including a same-state
//! set; callers refetch the list after a mutation instead of patching locally.

use chrono::NaiveDate;
use db::models::{
    appointment::{Appointment, AppointmentStatus, CreateAppointment},
    time_slot::TimeSlot,
};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use super::validate;

#[derive(Debug, Error)]
pub enum AppointmentError {
    #[error("{0}")]
    Validation(String),
    #[error("appointment not found")]
    NotFound,
    #[error("time slot not found")]
    SlotNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct AppointmentService {
    pool: SqlitePool,
}

impl AppointmentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Public booking entry point. Creates a pending appointment and marks
    /// the chosen time slot booked.
    pub async fn book(&self, data: CreateAppointment) -> Result<Appointment, AppointmentError> {
        validate::required("name", &data.name).map_err(AppointmentError::Validation)?;
        validate::email(&data.email).map_err(AppointmentError::Validation)?;
        validate::required("phone", &data.phone).map_err(AppointmentError::Validation)?;
        validate::required("service", &data.service).map_err(AppointmentError::Validation)?;

        if let Some(slot_id) = data.time_slot_id {
            let slot = TimeSlot::find_by_id(&self.pool, slot_id)
                .await?
                .ok_or(AppointmentError::SlotNotFound)?;
            if slot.booked {
                return Err(AppointmentError::Validation(
                    "time slot is already booked".to_string(),
                ));
            }
        }

        let appointment = Appointment::create(&self.pool, &data, Uuid::new_v4()).await?;

        if let Some(slot_id) = data.time_slot_id {
            // Best effort, no transaction. A failure here leaves the slot
            // selectable; the admin sees the appointment either way.
            if let Err(e) = TimeSlot::set_booked(&self.pool, slot_id, true).await {
                warn!(
                    appointment_id = %appointment.id,
                    slot_id = %slot_id,
                    error = %e,
                    "failed to mark time slot booked"
                );
            }
        }

        info!(id = %appointment.id, "appointment booked");
        Ok(appointment)
    }

    /// No transition guard: last write wins.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        if Appointment::update_status(&self.pool, id, status.clone()).await? == 0 {
            return Err(AppointmentError::NotFound);
        }
        info!(id = %id, status = %status, "appointment status updated");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(Appointment::list(&self.pool).await?)
    }

    pub async fn slots_for_date(&self, date: NaiveDate) -> Result<Vec<TimeSlot>, AppointmentError> {
        Ok(TimeSlot::list_by_date(&self.pool, date).await?)
    }
}
