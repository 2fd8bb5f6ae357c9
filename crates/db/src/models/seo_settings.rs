use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Site-wide SEO defaults. Sits between page-level records and the hardcoded
/// defaults in the resolution chain.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct SeoSettings {
    pub id: Uuid,
    pub site_title: String,
    pub site_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical_base: Option<String>,
    pub analytics_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateSeoSettings {
    pub site_title: String,
    pub site_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical_base: Option<String>,
    pub analytics_id: Option<String>,
}

impl SeoSettings {
    pub async fn load(pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, site_title, site_description, keywords, og_image,
                      canonical_base, analytics_id, created_at, updated_at
               FROM seo_settings
               ORDER BY created_at ASC
               LIMIT 1"#,
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn upsert(pool: &SqlitePool, data: &UpdateSeoSettings) -> Result<Self, sqlx::Error> {
        if let Some(existing) = Self::load(pool).await? {
            sqlx::query_as::<_, Self>(
                r#"UPDATE seo_settings
                   SET site_title = $1, site_description = $2, keywords = $3, og_image = $4,
                       canonical_base = $5, analytics_id = $6, updated_at = CURRENT_TIMESTAMP
                   WHERE id = $7
                   RETURNING id, site_title, site_description, keywords, og_image,
                             canonical_base, analytics_id, created_at, updated_at"#,
            )
            .bind(&data.site_title)
            .bind(&data.site_description)
            .bind(&data.keywords)
            .bind(&data.og_image)
            .bind(&data.canonical_base)
            .bind(&data.analytics_id)
            .bind(existing.id)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_as::<_, Self>(
                r#"INSERT INTO seo_settings
                       (id, site_title, site_description, keywords, og_image,
                        canonical_base, analytics_id)
                   VALUES ($1, $2, $3, $4, $5, $6, $7)
                   RETURNING id, site_title, site_description, keywords, og_image,
                             canonical_base, analytics_id, created_at, updated_at"#,
            )
            .bind(Uuid::new_v4())
            .bind(&data.site_title)
            .bind(&data.site_description)
            .bind(&data.keywords)
            .bind(&data.og_image)
            .bind(&data.canonical_base)
            .bind(&data.analytics_id)
            .fetch_one(pool)
            .await
        }
    }
}
