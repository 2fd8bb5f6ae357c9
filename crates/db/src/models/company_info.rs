use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Company profile slot. `logo_file_id` references an object in file storage;
/// it is only ever replaced after a successful upload.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CompanyInfo {
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub founded_year: Option<i64>,
    pub logo_file_id: Option<String>,
    pub certifications: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateCompanyInfo {
    pub name: String,
    pub about: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub founded_year: Option<i64>,
    pub logo_file_id: Option<String>,
    pub certifications: Option<String>,
}

impl CompanyInfo {
    pub async fn load(pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, name, about, phone, email, address, founded_year,
                      logo_file_id, certifications, created_at, updated_at
               FROM company_info
               ORDER BY created_at ASC
               LIMIT 1"#,
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn upsert(pool: &SqlitePool, data: &UpdateCompanyInfo) -> Result<Self, sqlx::Error> {
        if let Some(existing) = Self::load(pool).await? {
            sqlx::query_as::<_, Self>(
                r#"UPDATE company_info
                   SET name = $1, about = $2, phone = $3, email = $4, address = $5,
                       founded_year = $6, logo_file_id = $7, certifications = $8,
                       updated_at = CURRENT_TIMESTAMP
                   WHERE id = $9
                   RETURNING id, name, about, phone, email, address, founded_year,
                             logo_file_id, certifications, created_at, updated_at"#,
            )
            .bind(&data.name)
            .bind(&data.about)
            .bind(&data.phone)
            .bind(&data.email)
            .bind(&data.address)
            .bind(data.founded_year)
            .bind(&data.logo_file_id)
            .bind(&data.certifications)
            .bind(existing.id)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_as::<_, Self>(
                r#"INSERT INTO company_info
                       (id, name, about, phone, email, address, founded_year,
                        logo_file_id, certifications)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                   RETURNING id, name, about, phone, email, address, founded_year,
                             logo_file_id, certifications, created_at, updated_at"#,
            )
            .bind(Uuid::new_v4())
            .bind(&data.name)
            .bind(&data.about)
            .bind(&data.phone)
            .bind(&data.email)
            .bind(&data.address)
            .bind(data.founded_year)
            .bind(&data.logo_file_id)
            .bind(&data.certifications)
            .fetch_one(pool)
            .await
        }
    }
}
