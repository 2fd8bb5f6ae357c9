use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

/// Appointment lifecycle state. Any state may transition to any other,
/// including back to pending; there is no transition guard.
#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub requested_date: NaiveDate,
    pub time_slot_id: Option<Uuid>,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub requested_date: NaiveDate,
    pub time_slot_id: Option<Uuid>,
    pub message: Option<String>,
}

impl Appointment {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, email, phone, service, requested_date, time_slot_id,
                      message, status, created_at, updated_at
               FROM appointments
               ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, email, phone, service, requested_date, time_slot_id,
                      message, status, created_at, updated_at
               FROM appointments
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// New appointments always start out pending.
    pub async fn create(
        pool: &SqlitePool,
        data: &CreateAppointment,
        id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO appointments
                   (id, name, email, phone, service, requested_date, time_slot_id, message, status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING id, name, email, phone, service, requested_date, time_slot_id,
                         message, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.service)
        .bind(data.requested_date)
        .bind(data.time_slot_id)
        .bind(&data.message)
        .bind(AppointmentStatus::Pending)
        .fetch_one(pool)
        .await
    }

    pub async fn update_status(
        pool: &SqlitePool,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
