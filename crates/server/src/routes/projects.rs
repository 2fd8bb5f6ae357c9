use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::site_project::{CreateSiteProject, SiteProject, UpdateSiteProject};
use serde::Deserialize;
use services::services::{content, validate};
use tracing::warn;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> ResponseJson<ApiResponse<Vec<SiteProject>>> {
    let projects = match SiteProject::list(&state.db.pool).await {
        Ok(projects) => projects,
        Err(e) => {
            warn!(error = %e, "failed to load projects, serving empty");
            Vec::new()
        }
    };
    let filtered = content::filter_projects(projects, query.category.as_deref());
    ResponseJson(ApiResponse::success(filtered))
}

pub async fn list_projects_admin(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<SiteProject>>>, ApiError> {
    let projects = SiteProject::list(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(projects)))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateSiteProject>,
) -> Result<ResponseJson<ApiResponse<SiteProject>>, ApiError> {
    validate::required("title", &payload.title).map_err(ApiError::Validation)?;
    let project = SiteProject::create(&state.db.pool, &payload, Uuid::new_v4()).await?;
    Ok(ResponseJson(ApiResponse::success(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSiteProject>,
) -> Result<ResponseJson<ApiResponse<SiteProject>>, ApiError> {
    validate::required("title", &payload.title).map_err(ApiError::Validation)?;
    let project = SiteProject::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(project)))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if SiteProject::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route(
            "/admin/projects",
            get(list_projects_admin).post(create_project),
        )
        .route(
            "/admin/projects/{id}",
            put(update_project).delete(delete_project),
        )
}
