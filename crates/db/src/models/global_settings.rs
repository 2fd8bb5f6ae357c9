use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Site-wide settings. Singleton slot: at most one row is authoritative.
/// Readers take the oldest row so the winner is stable across loads.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct GlobalSettings {
    pub id: Uuid,
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub maintenance_mode: bool,
    pub analytics_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateGlobalSettings {
    pub site_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub maintenance_mode: bool,
    pub analytics_id: Option<String>,
}

impl GlobalSettings {
    pub async fn load(pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, site_name, tagline, contact_email, contact_phone, address,
                      facebook_url, instagram_url, linkedin_url, maintenance_mode,
                      analytics_id, created_at, updated_at
               FROM global_settings
               ORDER BY created_at ASC
               LIMIT 1"#,
        )
        .fetch_optional(pool)
        .await
    }

    /// Full-document upsert: update the authoritative row when one exists,
    /// insert a fresh one otherwise.
    pub async fn upsert(
        pool: &SqlitePool,
        data: &UpdateGlobalSettings,
    ) -> Result<Self, sqlx::Error> {
        if let Some(existing) = Self::load(pool).await? {
            sqlx::query_as::<_, Self>(
                r#"UPDATE global_settings
                   SET site_name = $1, tagline = $2, contact_email = $3, contact_phone = $4,
                       address = $5, facebook_url = $6, instagram_url = $7, linkedin_url = $8,
                       maintenance_mode = $9, analytics_id = $10, updated_at = CURRENT_TIMESTAMP
                   WHERE id = $11
                   RETURNING id, site_name, tagline, contact_email, contact_phone, address,
                             facebook_url, instagram_url, linkedin_url, maintenance_mode,
                             analytics_id, created_at, updated_at"#,
            )
            .bind(&data.site_name)
            .bind(&data.tagline)
            .bind(&data.contact_email)
            .bind(&data.contact_phone)
            .bind(&data.address)
            .bind(&data.facebook_url)
            .bind(&data.instagram_url)
            .bind(&data.linkedin_url)
            .bind(data.maintenance_mode)
            .bind(&data.analytics_id)
            .bind(existing.id)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_as::<_, Self>(
                r#"INSERT INTO global_settings
                       (id, site_name, tagline, contact_email, contact_phone, address,
                        facebook_url, instagram_url, linkedin_url, maintenance_mode, analytics_id)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                   RETURNING id, site_name, tagline, contact_email, contact_phone, address,
                             facebook_url, instagram_url, linkedin_url, maintenance_mode,
                             analytics_id, created_at, updated_at"#,
            )
            .bind(Uuid::new_v4())
            .bind(&data.site_name)
            .bind(&data.tagline)
            .bind(&data.contact_email)
            .bind(&data.contact_phone)
            .bind(&data.address)
            .bind(&data.facebook_url)
            .bind(&data.instagram_url)
            .bind(&data.linkedin_url)
            .bind(data.maintenance_mode)
            .bind(&data.analytics_id)
            .fetch_one(pool)
            .await
        }
    }
}
