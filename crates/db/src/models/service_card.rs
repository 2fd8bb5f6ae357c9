use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Service offering card on the services page. Ordered collection.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct ServiceCard {
    pub id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateServiceCard {
    pub title: String,
    pub summary: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateServiceCard {
    pub title: String,
    pub summary: Option<String>,
    pub icon: Option<String>,
}

impl ServiceCard {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, summary, icon, position, created_at, updated_at
               FROM service_cards
               ORDER BY position ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, summary, icon, position, created_at, updated_at
               FROM service_cards
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateServiceCard,
        id: Uuid,
        position: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO service_cards (id, title, summary, icon, position)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, title, summary, icon, position, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.icon)
        .bind(position)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateServiceCard,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE service_cards
               SET title = $1, summary = $2, icon = $3, updated_at = CURRENT_TIMESTAMP
               WHERE id = $4
               RETURNING id, title, summary, icon, position, created_at, updated_at"#,
        )
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.icon)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn set_position(
        pool: &SqlitePool,
        id: Uuid,
        position: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE service_cards SET position = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(position)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
