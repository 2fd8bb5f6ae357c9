use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Testimonial {
    pub id: Uuid,
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub rating: Option<i64>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateTestimonial {
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub rating: Option<i64>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateTestimonial {
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub rating: Option<i64>,
    pub photo: Option<String>,
}

impl Testimonial {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, author, role, quote, rating, photo, created_at, updated_at
               FROM testimonials
               ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateTestimonial,
        id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO testimonials (id, author, role, quote, rating, photo)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, author, role, quote, rating, photo, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.author)
        .bind(&data.role)
        .bind(&data.quote)
        .bind(data.rating)
        .bind(&data.photo)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateTestimonial,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE testimonials
               SET author = $1, role = $2, quote = $3, rating = $4, photo = $5,
                   updated_at = CURRENT_TIMESTAMP
               WHERE id = $6
               RETURNING id, author, role, quote, rating, photo, created_at, updated_at"#,
        )
        .bind(&data.author)
        .bind(&data.role)
        .bind(&data.quote)
        .bind(data.rating)
        .bind(&data.photo)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
