use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
}

impl BlogPost {
    /// Full list for the admin table; public readers filter to published.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, slug, excerpt, body, category, cover_image, published,
                      published_at, created_at, updated_at
               FROM blog_posts
               ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, slug, excerpt, body, category, cover_image, published,
                      published_at, created_at, updated_at
               FROM blog_posts
               WHERE slug = $1"#,
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateBlogPost,
        id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let published_at = data.published.then(Utc::now);
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO blog_posts
                   (id, title, slug, excerpt, body, category, cover_image, published, published_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING id, title, slug, excerpt, body, category, cover_image, published,
                         published_at, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.excerpt)
        .bind(&data.body)
        .bind(&data.category)
        .bind(&data.cover_image)
        .bind(data.published)
        .bind(published_at)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateBlogPost,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE blog_posts
               SET title = $1, slug = $2, excerpt = $3, body = $4, category = $5,
                   cover_image = $6, published = $7,
                   published_at = CASE WHEN $7 AND published_at IS NULL
                                       THEN CURRENT_TIMESTAMP ELSE published_at END,
                   updated_at = CURRENT_TIMESTAMP
               WHERE id = $8
               RETURNING id, title, slug, excerpt, body, category, cover_image, published,
                         published_at, created_at, updated_at"#,
        )
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.excerpt)
        .bind(&data.body)
        .bind(&data.category)
        .bind(&data.cover_image)
        .bind(data.published)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
