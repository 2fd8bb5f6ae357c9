use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use serde::Deserialize;
use services::services::{content, validate};
use tracing::warn;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Public listing: published posts only, optionally narrowed by category and
/// a case-insensitive search over title and excerpt.
pub async fn list_published_posts(
    State(state): State<AppState>,
    Query(query): Query<PostQuery>,
) -> ResponseJson<ApiResponse<Vec<BlogPost>>> {
    let posts = match BlogPost::list(&state.db.pool).await {
        Ok(posts) => posts,
        Err(e) => {
            warn!(error = %e, "failed to load blog posts, serving empty");
            Vec::new()
        }
    };
    let filtered = content::filter_posts(posts, query.category.as_deref(), query.search.as_deref());
    ResponseJson(ApiResponse::success(filtered))
}

pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<BlogPost>>, ApiError> {
    let post = BlogPost::find_by_slug(&state.db.pool, &slug)
        .await?
        .filter(|post| post.published)
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(post)))
}

pub async fn list_posts_admin(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<BlogPost>>>, ApiError> {
    let posts = BlogPost::list(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(posts)))
}

fn check(title: &str, slug: &str) -> Result<(), ApiError> {
    validate::required("title", title).map_err(ApiError::Validation)?;
    validate::required("slug", slug).map_err(ApiError::Validation)
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogPost>,
) -> Result<ResponseJson<ApiResponse<BlogPost>>, ApiError> {
    check(&payload.title, &payload.slug)?;
    let post = BlogPost::create(&state.db.pool, &payload, Uuid::new_v4()).await?;
    Ok(ResponseJson(ApiResponse::success(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogPost>,
) -> Result<ResponseJson<ApiResponse<BlogPost>>, ApiError> {
    check(&payload.title, &payload.slug)?;
    let post = BlogPost::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(post)))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if BlogPost::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog", get(list_published_posts))
        .route("/blog/{slug}", get(get_post_by_slug))
        .route("/admin/blog", get(list_posts_admin).post(create_post))
        .route("/admin/blog/{id}", put(update_post).delete(delete_post))
}
