use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Public navigation entry. `position` is kept unique and contiguous by the
/// ordering service; readers sort by (position, created_at) and never assume
/// gap-freeness.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct NavItem {
    pub id: Uuid,
    pub title: String,
    pub path: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateNavItem {
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateNavItem {
    pub title: String,
    pub path: String,
}

impl NavItem {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, path, position, created_at, updated_at
               FROM nav_items
               ORDER BY position ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, path, position, created_at, updated_at
               FROM nav_items
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateNavItem,
        id: Uuid,
        position: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO nav_items (id, title, path, position)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, path, position, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.path)
        .bind(position)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateNavItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE nav_items
               SET title = $1, path = $2, updated_at = CURRENT_TIMESTAMP
               WHERE id = $3
               RETURNING id, title, path, position, created_at, updated_at"#,
        )
        .bind(&data.title)
        .bind(&data.path)
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
            "UPDATE nav_items SET position = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(position)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM nav_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
