use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Per-page SEO overrides, keyed by exact page path. Absence of a record for
/// a path is valid and falls through to the site-wide settings.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct PageSeo {
    pub id: Uuid,
    pub page_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpsertPageSeo {
    pub page_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
}

impl PageSeo {
    pub async fn find_by_path(
        pool: &SqlitePool,
        page_path: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, page_path, title, description, keywords, canonical_url, og_image,
                      created_at, updated_at
               FROM page_seo
               WHERE page_path = $1"#,
        )
        .bind(page_path)
        .fetch_optional(pool)
        .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, page_path, title, description, keywords, canonical_url, og_image,
                      created_at, updated_at
               FROM page_seo
               ORDER BY page_path ASC"#,
        )
        .fetch_all(pool)
        .await
    }

    /// One record per path, enforced by the unique index.
    pub async fn upsert(pool: &SqlitePool, data: &UpsertPageSeo) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO page_seo (id, page_path, title, description, keywords, canonical_url, og_image)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               ON CONFLICT(page_path) DO UPDATE SET
                   title = excluded.title,
                   description = excluded.description,
                   keywords = excluded.keywords,
                   canonical_url = excluded.canonical_url,
                   og_image = excluded.og_image,
                   updated_at = CURRENT_TIMESTAMP
               RETURNING id, page_path, title, description, keywords, canonical_url, og_image,
                         created_at, updated_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.page_path)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.keywords)
        .bind(&data.canonical_url)
        .bind(&data.og_image)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_seo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
