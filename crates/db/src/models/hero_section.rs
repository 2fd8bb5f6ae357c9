use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct HeroSection {
    pub id: Uuid,
    pub heading: String,
    pub subheading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub background_image_file_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateHeroSection {
    pub heading: String,
    pub subheading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub background_image_file_id: Option<String>,
}

impl HeroSection {
    pub async fn load(pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, heading, subheading, cta_label, cta_url,
                      background_image_file_id, created_at, updated_at
               FROM hero_section
               ORDER BY created_at ASC
               LIMIT 1"#,
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn upsert(pool: &SqlitePool, data: &UpdateHeroSection) -> Result<Self, sqlx::Error> {
        if let Some(existing) = Self::load(pool).await? {
            sqlx::query_as::<_, Self>(
                r#"UPDATE hero_section
                   SET heading = $1, subheading = $2, cta_label = $3, cta_url = $4,
                       background_image_file_id = $5, updated_at = CURRENT_TIMESTAMP
                   WHERE id = $6
                   RETURNING id, heading, subheading, cta_label, cta_url,
                             background_image_file_id, created_at, updated_at"#,
            )
            .bind(&data.heading)
            .bind(&data.subheading)
            .bind(&data.cta_label)
            .bind(&data.cta_url)
            .bind(&data.background_image_file_id)
            .bind(existing.id)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_as::<_, Self>(
                r#"INSERT INTO hero_section
                       (id, heading, subheading, cta_label, cta_url, background_image_file_id)
                   VALUES ($1, $2, $3, $4, $5, $6)
                   RETURNING id, heading, subheading, cta_label, cta_url,
                             background_image_file_id, created_at, updated_at"#,
            )
            .bind(Uuid::new_v4())
            .bind(&data.heading)
            .bind(&data.subheading)
            .bind(&data.cta_label)
            .bind(&data.cta_url)
            .bind(&data.background_image_file_id)
            .fetch_one(pool)
            .await
        }
    }
}
