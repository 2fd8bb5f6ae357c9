use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// One step of the "how we work" section. Ordered collection.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct ProcessStep {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateProcessStep {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateProcessStep {
    pub name: String,
    pub description: Option<String>,
}

impl ProcessStep {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, description, position, created_at, updated_at
               FROM process_steps
               ORDER BY position ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, description, position, created_at, updated_at
               FROM process_steps
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateProcessStep,
        id: Uuid,
        position: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO process_steps (id, name, description, position)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, description, position, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(position)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateProcessStep,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE process_steps
               SET name = $1, description = $2, updated_at = CURRENT_TIMESTAMP
               WHERE id = $3
               RETURNING id, name, description, position, created_at, updated_at"#,
        )
        .bind(&data.name)
        .bind(&data.description)
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
            "UPDATE process_steps SET position = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(position)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM process_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
