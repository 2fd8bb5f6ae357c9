use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Bookable slot on a given day. `booked` is flipped when an appointment
/// claims the slot.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct TimeSlot {
    pub id: Uuid,
    pub slot_date: NaiveDate,
    pub label: String,
    pub booked: bool,
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    pub async fn list_by_date(
        pool: &SqlitePool,
        date: NaiveDate,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, slot_date, label, booked, created_at
               FROM time_slots
               WHERE slot_date = $1
               ORDER BY label ASC"#,
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, slot_date, label, booked, created_at
               FROM time_slots
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        date: NaiveDate,
        label: &str,
        id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO time_slots (id, slot_date, label)
               VALUES ($1, $2, $3)
               RETURNING id, slot_date, label, booked, created_at"#,
        )
        .bind(id)
        .bind(date)
        .bind(label)
        .fetch_one(pool)
        .await
    }

    pub async fn set_booked(
        pool: &SqlitePool,
        id: Uuid,
        booked: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE time_slots SET booked = $1 WHERE id = $2")
            .bind(booked)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
