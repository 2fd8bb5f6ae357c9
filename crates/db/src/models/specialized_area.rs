use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Specialized service area (e.g. rooftop, off-grid). Ordered collection.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct SpecializedArea {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateSpecializedArea {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateSpecializedArea {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl SpecializedArea {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, description, icon, position, created_at, updated_at
               FROM specialized_areas
               ORDER BY position ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, description, icon, position, created_at, updated_at
               FROM specialized_areas
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateSpecializedArea,
        id: Uuid,
        position: i64,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO specialized_areas (id, name, description, icon, position)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, name, description, icon, position, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.icon)
        .bind(position)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateSpecializedArea,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE specialized_areas
               SET name = $1, description = $2, icon = $3, updated_at = CURRENT_TIMESTAMP
               WHERE id = $4
               RETURNING id, name, description, icon, position, created_at, updated_at"#,
        )
        .bind(&data.name)
        .bind(&data.description)
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
            "UPDATE specialized_areas SET position = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(position)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM specialized_areas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
