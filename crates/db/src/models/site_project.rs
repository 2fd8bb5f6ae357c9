use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Completed installation shown on the projects page.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct SiteProject {
    pub id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub capacity_kw: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub completed_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateSiteProject {
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub capacity_kw: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub completed_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateSiteProject {
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub capacity_kw: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub completed_at: Option<NaiveDate>,
}

impl SiteProject {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, category, location, capacity_kw, description, image,
                      completed_at, created_at, updated_at
               FROM site_projects
               ORDER BY completed_at DESC, created_at DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateSiteProject,
        id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO site_projects
                   (id, title, category, location, capacity_kw, description, image, completed_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id, title, category, location, capacity_kw, description, image,
                         completed_at, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.category)
        .bind(&data.location)
        .bind(data.capacity_kw)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.completed_at)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateSiteProject,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE site_projects
               SET title = $1, category = $2, location = $3, capacity_kw = $4,
                   description = $5, image = $6, completed_at = $7, updated_at = CURRENT_TIMESTAMP
               WHERE id = $8
               RETURNING id, title, category, location, capacity_kw, description, image,
                         completed_at, created_at, updated_at"#,
        )
        .bind(&data.title)
        .bind(&data.category)
        .bind(&data.location)
        .bind(data.capacity_kw)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.completed_at)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
