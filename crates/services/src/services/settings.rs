//! Admin mutation gateway for the singleton content slots. Upsert semantics:
//! callers never need to know whether a document already exists. Validation
//! runs before any query; a failed file upload aborts the whole save so the
//! previously persisted state is never left half-updated.

use std::sync::Arc;

use db::models::{
    company_info::{CompanyInfo, UpdateCompanyInfo},
    global_settings::{GlobalSettings, UpdateGlobalSettings},
    hero_section::{HeroSection, UpdateHeroSection},
    page_seo::{PageSeo, UpsertPageSeo},
    seo_settings::{SeoSettings, UpdateSeoSettings},
};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::{
    content_resolver::ContentResolver,
    storage::{FileStorage, StorageError},
    validate,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0}")]
    Validation(String),
    #[error("record not found")]
    NotFound,
    #[error("file upload failed: {0}")]
    Upload(#[from] StorageError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A file attached to a slot save (logo, hero background).
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct SettingsService {
    pool: SqlitePool,
    storage: Arc<FileStorage>,
    resolver: Arc<ContentResolver>,
}

impl SettingsService {
    pub fn new(pool: SqlitePool, storage: Arc<FileStorage>, resolver: Arc<ContentResolver>) -> Self {
        Self {
            pool,
            storage,
            resolver,
        }
    }

    pub async fn save_global_settings(
        &self,
        data: UpdateGlobalSettings,
    ) -> Result<GlobalSettings, SettingsError> {
        validate::required("site_name", &data.site_name).map_err(SettingsError::Validation)?;
        let saved = GlobalSettings::upsert(&self.pool, &data).await?;
        self.resolver.invalidate();
        info!(id = %saved.id, "global settings saved");
        Ok(saved)
    }

    /// Logo upload happens first; only a successful upload's file id is
    /// merged into the persisted field set.
    pub async fn save_company_info(
        &self,
        mut data: UpdateCompanyInfo,
        logo: Option<Upload>,
    ) -> Result<CompanyInfo, SettingsError> {
        validate::required("name", &data.name).map_err(SettingsError::Validation)?;
        if let Some(upload) = logo {
            let stored = self.storage.store(&upload.filename, &upload.bytes).await?;
            data.logo_file_id = Some(stored.id);
        }
        let saved = CompanyInfo::upsert(&self.pool, &data).await?;
        self.resolver.invalidate();
        info!(id = %saved.id, "company info saved");
        Ok(saved)
    }

    pub async fn save_hero_section(
        &self,
        mut data: UpdateHeroSection,
        background: Option<Upload>,
    ) -> Result<HeroSection, SettingsError> {
        validate::required("heading", &data.heading).map_err(SettingsError::Validation)?;
        if let Some(upload) = background {
            let stored = self.storage.store(&upload.filename, &upload.bytes).await?;
            data.background_image_file_id = Some(stored.id);
        }
        let saved = HeroSection::upsert(&self.pool, &data).await?;
        self.resolver.invalidate();
        Ok(saved)
    }

    pub async fn save_seo_settings(
        &self,
        data: UpdateSeoSettings,
    ) -> Result<SeoSettings, SettingsError> {
        validate::required("site_title", &data.site_title).map_err(SettingsError::Validation)?;
        let saved = SeoSettings::upsert(&self.pool, &data).await?;
        self.resolver.invalidate();
        Ok(saved)
    }

    pub async fn save_page_seo(&self, data: UpsertPageSeo) -> Result<PageSeo, SettingsError> {
        validate::required("page_path", &data.page_path).map_err(SettingsError::Validation)?;
        Ok(PageSeo::upsert(&self.pool, &data).await?)
    }

    pub async fn delete_page_seo(&self, id: Uuid) -> Result<(), SettingsError> {
        if PageSeo::delete(&self.pool, id).await? == 0 {
            return Err(SettingsError::NotFound);
        }
        Ok(())
    }
}
