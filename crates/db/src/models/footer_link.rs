use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct FooterLink {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateFooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateFooterLink {
    pub label: String,
    pub url: String,
}

impl FooterLink {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, label, url, position, created_at, updated_at
               FROM footer_links
               ORDER BY position ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, label, url, position, created_at, updated_at
               FROM footer_links
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateFooterLink,
        id: Uuid,
        position: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO footer_links (id, label, url, position)
               VALUES ($1, $2, $3, $4)
               RETURNING id, label, url, position, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.label)
        .bind(&data.url)
        .bind(position)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateFooterLink,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE footer_links
               SET label = $1, url = $2, updated_at = CURRENT_TIMESTAMP
               WHERE id = $3
               RETURNING id, label, url, position, created_at, updated_at"#,
        )
        .bind(&data.label)
        .bind(&data.url)
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
            "UPDATE footer_links SET position = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(position)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM footer_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
