//! Public read surface for the site: resolved page metadata, singleton
//! sections and the ordered collections the frontend renders. All handlers
//! here degrade on database errors instead of failing the page.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::{
    company_info::CompanyInfo, footer_link::FooterLink, global_settings::GlobalSettings,
    hero_section::HeroSection, nav_item::NavItem, process_step::ProcessStep,
    service_card::ServiceCard, specialized_area::SpecializedArea,
};
use serde::Deserialize;
use services::services::{
    content_resolver::{MetaOverrides, ResolvedMeta},
    head,
    ordering::{
        self, FooterLinkStore, NavItemStore, OrderedStore, ProcessStepStore, ServiceCardStore,
        SpecializedAreaStore,
    },
};
use tracing::warn;
use utils::response::ApiResponse;

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MetaQuery {
    pub path: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

impl MetaQuery {
    fn overrides(&self) -> MetaOverrides {
        MetaOverrides {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            og_image: self.og_image.clone(),
            canonical_url: self.canonical_url.clone(),
        }
    }
}

pub async fn get_meta(
    State(state): State<AppState>,
    Query(query): Query<MetaQuery>,
) -> ResponseJson<ApiResponse<ResolvedMeta>> {
    let path = query.path.as_deref().unwrap_or("/");
    let meta = state.resolver.resolve(path, &query.overrides()).await;
    ResponseJson(ApiResponse::success(meta))
}

#[derive(Debug, Deserialize)]
pub struct HeadRequest {
    pub head: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub overrides: MetaOverrides,
}

/// Rewrites a document `<head>` with the resolved metadata for the page.
/// Applying the same metadata twice yields the same markup.
pub async fn render_head(
    State(state): State<AppState>,
    Json(request): Json<HeadRequest>,
) -> ResponseJson<ApiResponse<String>> {
    let path = request.path.as_deref().unwrap_or("/");
    let meta = state.resolver.resolve(path, &request.overrides).await;
    ResponseJson(ApiResponse::success(head::apply(&request.head, &meta)))
}

pub async fn get_hero(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Option<HeroSection>>> {
    match HeroSection::load(&state.db.pool).await {
        Ok(hero) => ResponseJson(ApiResponse::success(hero)),
        Err(e) => {
            warn!(error = %e, "failed to load hero section, serving none");
            ResponseJson(ApiResponse::success(None))
        }
    }
}

pub async fn get_company(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Option<CompanyInfo>>> {
    ResponseJson(ApiResponse::success(state.resolver.company_info().await))
}

pub async fn get_settings(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Option<GlobalSettings>>> {
    ResponseJson(ApiResponse::success(state.resolver.global_settings().await))
}

/// Ordered collections served in display order; on error the frontend gets an
/// empty list and renders its own fallback.
async fn list_or_empty<S: OrderedStore>(store: &S, what: &str) -> Vec<S::Item> {
    match ordering::list_ordered(store).await {
        Ok(items) => items,
        Err(e) => {
            warn!(collection = what, error = %e, "failed to load collection, serving empty");
            Vec::new()
        }
    }
}

pub async fn get_navigation(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<NavItem>>> {
    let store = NavItemStore {
        pool: state.db.pool.clone(),
    };
    ResponseJson(ApiResponse::success(
        list_or_empty(&store, "nav_items").await,
    ))
}

pub async fn get_process_steps(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<ProcessStep>>> {
    let store = ProcessStepStore {
        pool: state.db.pool.clone(),
    };
    ResponseJson(ApiResponse::success(
        list_or_empty(&store, "process_steps").await,
    ))
}

pub async fn get_specialized_areas(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<SpecializedArea>>> {
    let store = SpecializedAreaStore {
        pool: state.db.pool.clone(),
    };
    ResponseJson(ApiResponse::success(
        list_or_empty(&store, "specialized_areas").await,
    ))
}

pub async fn get_footer_links(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<FooterLink>>> {
    let store = FooterLinkStore {
        pool: state.db.pool.clone(),
    };
    ResponseJson(ApiResponse::success(
        list_or_empty(&store, "footer_links").await,
    ))
}

pub async fn get_service_cards(
    State(state): State<AppState>,
) -> ResponseJson<ApiResponse<Vec<ServiceCard>>> {
    let store = ServiceCardStore {
        pool: state.db.pool.clone(),
    };
    ResponseJson(ApiResponse::success(
        list_or_empty(&store, "service_cards").await,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site/meta", get(get_meta))
        .route("/site/head", post(render_head))
        .route("/site/hero", get(get_hero))
        .route("/site/company", get(get_company))
        .route("/site/settings", get(get_settings))
        .route("/site/navigation", get(get_navigation))
        .route("/site/process-steps", get(get_process_steps))
        .route("/site/specialized-areas", get(get_specialized_areas))
        .route("/site/footer-links", get(get_footer_links))
        .route("/site/services", get(get_service_cards))
        .route("/services", get(get_service_cards))
}
