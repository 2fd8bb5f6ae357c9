//! Admin endpoints for the singleton content slots. Saves are upserts; the
//! client edits one logical document per slot and never supplies an id.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::{
    company_info::{CompanyInfo, UpdateCompanyInfo},
    global_settings::{GlobalSettings, UpdateGlobalSettings},
    hero_section::{HeroSection, UpdateHeroSection},
    seo_settings::{SeoSettings, UpdateSeoSettings},
};
use services::services::settings::Upload;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn get_global_settings(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Option<GlobalSettings>>>, ApiError> {
    let settings = GlobalSettings::load(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(settings)))
}

pub async fn save_global_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateGlobalSettings>,
) -> Result<ResponseJson<ApiResponse<GlobalSettings>>, ApiError> {
    let saved = state.settings.save_global_settings(payload).await?;
    Ok(ResponseJson(ApiResponse::success_with_message(
        saved,
        "Settings saved".to_string(),
    )))
}

pub async fn get_company_info(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Option<CompanyInfo>>>, ApiError> {
    let info = CompanyInfo::load(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(info)))
}

pub async fn save_company_info(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCompanyInfo>,
) -> Result<ResponseJson<ApiResponse<CompanyInfo>>, ApiError> {
    let saved = state.settings.save_company_info(payload, None).await?;
    Ok(ResponseJson(ApiResponse::success_with_message(
        saved,
        "Company info saved".to_string(),
    )))
}

/// Replaces the company logo. The current field values are re-saved with the
/// freshly stored file id; if the upload fails nothing is written.
pub async fn upload_company_logo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ResponseJson<ApiResponse<CompanyInfo>>, ApiError> {
    let upload = read_file_field(multipart).await?;
    let current = CompanyInfo::load(&state.db.pool)
        .await?
        .ok_or_else(|| ApiError::Validation("save company info before uploading a logo".into()))?;
    let data = UpdateCompanyInfo {
        name: current.name,
        about: current.about,
        phone: current.phone,
        email: current.email,
        address: current.address,
        founded_year: current.founded_year,
        logo_file_id: current.logo_file_id,
        certifications: current.certifications,
    };
    let saved = state.settings.save_company_info(data, Some(upload)).await?;
    Ok(ResponseJson(ApiResponse::success(saved)))
}

pub async fn get_hero_section(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Option<HeroSection>>>, ApiError> {
    let hero = HeroSection::load(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(hero)))
}

pub async fn save_hero_section(
    State(state): State<AppState>,
    Json(payload): Json<UpdateHeroSection>,
) -> Result<ResponseJson<ApiResponse<HeroSection>>, ApiError> {
    let saved = state.settings.save_hero_section(payload, None).await?;
    Ok(ResponseJson(ApiResponse::success(saved)))
}

pub async fn upload_hero_background(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ResponseJson<ApiResponse<HeroSection>>, ApiError> {
    let upload = read_file_field(multipart).await?;
    let current = HeroSection::load(&state.db.pool).await?.ok_or_else(|| {
        ApiError::Validation("save the hero section before uploading a background".into())
    })?;
    let data = UpdateHeroSection {
        heading: current.heading,
        subheading: current.subheading,
        cta_label: current.cta_label,
        cta_url: current.cta_url,
        background_image_file_id: current.background_image_file_id,
    };
    let saved = state.settings.save_hero_section(data, Some(upload)).await?;
    Ok(ResponseJson(ApiResponse::success(saved)))
}

pub async fn get_seo_settings(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Option<SeoSettings>>>, ApiError> {
    let seo = SeoSettings::load(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(seo)))
}

pub async fn save_seo_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSeoSettings>,
) -> Result<ResponseJson<ApiResponse<SeoSettings>>, ApiError> {
    let saved = state.settings.save_seo_settings(payload).await?;
    Ok(ResponseJson(ApiResponse::success_with_message(
        saved,
        "SEO settings saved".to_string(),
    )))
}

async fn read_file_field(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("upload.bin")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            return Ok(Upload {
                filename,
                bytes: bytes.to_vec(),
            });
        }
    }
    Err(ApiError::Validation("missing file field".to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/settings/global",
            get(get_global_settings).put(save_global_settings),
        )
        .route(
            "/admin/settings/company",
            get(get_company_info).put(save_company_info),
        )
        .route("/admin/settings/company/logo", post(upload_company_logo))
        .route(
            "/admin/settings/hero",
            get(get_hero_section).put(save_hero_section),
        )
        .route("/admin/settings/hero/background", post(upload_hero_background))
        .route(
            "/admin/settings/seo",
            get(get_seo_settings).put(save_seo_settings),
        )
}
