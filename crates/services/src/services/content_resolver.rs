//! Resolves effective page content by precedence: caller override, then the
//! page-specific record, then the site-wide record, then a hardcoded default.
//! Read failures degrade to the next source; a public page never fails to
//! render because the backend was unreachable.

use std::time::Duration;

use db::models::{
    company_info::CompanyInfo, global_settings::GlobalSettings, page_seo::PageSeo,
    seo_settings::SeoSettings,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::warn;
use ts_rs::TS;

pub const DEFAULT_TITLE: &str = "Solar Shine | Solar Energy Services";
pub const DEFAULT_DESCRIPTION: &str =
    "Design, installation and maintenance of solar energy systems for homes and businesses.";
pub const DEFAULT_KEYWORDS: &str = "solar, solar panels, renewable energy, installation";
pub const DEFAULT_OG_IMAGE: &str = "/images/og-default.jpg";
pub const DEFAULT_CANONICAL_BASE: &str = "https://solarshine.example";

/// Read-mostly slots are cached this long; admin saves invalidate eagerly.
const SLOT_TTL: Duration = Duration::from_secs(300);

/// Caller-supplied overrides, the highest-precedence source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct MetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    pub canonical_url: String,
    pub analytics_id: Option<String>,
}

/// First source that yields a non-empty value wins. `None` and `""` both fall
/// through; whitespace does not (matching `a || b || c || d` semantics).
pub fn first_non_empty<I>(sources: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    sources
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

pub struct ContentResolver {
    pool: SqlitePool,
    seo: Cache<(), Option<SeoSettings>>,
    global: Cache<(), Option<GlobalSettings>>,
    company: Cache<(), Option<CompanyInfo>>,
}

impl ContentResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            seo: Cache::builder().time_to_live(SLOT_TTL).build(),
            global: Cache::builder().time_to_live(SLOT_TTL).build(),
            company: Cache::builder().time_to_live(SLOT_TTL).build(),
        }
    }

    /// Drop all cached slots. Called after any admin save so the public site
    /// picks the change up immediately instead of after the TTL.
    pub fn invalidate(&self) {
        self.seo.invalidate_all();
        self.global.invalidate_all();
        self.company.invalidate_all();
    }

    pub async fn seo_settings(&self) -> Option<SeoSettings> {
        if let Some(hit) = self.seo.get(&()).await {
            return hit;
        }
        match SeoSettings::load(&self.pool).await {
            Ok(value) => {
                self.seo.insert((), value.clone()).await;
                value
            }
            Err(e) => {
                warn!(error = %e, "failed to load seo settings, degrading to defaults");
                None
            }
        }
    }

    pub async fn global_settings(&self) -> Option<GlobalSettings> {
        if let Some(hit) = self.global.get(&()).await {
            return hit;
        }
        match GlobalSettings::load(&self.pool).await {
            Ok(value) => {
                self.global.insert((), value.clone()).await;
                value
            }
            Err(e) => {
                warn!(error = %e, "failed to load global settings, degrading to defaults");
                None
            }
        }
    }

    pub async fn company_info(&self) -> Option<CompanyInfo> {
        if let Some(hit) = self.company.get(&()).await {
            return hit;
        }
        match CompanyInfo::load(&self.pool).await {
            Ok(value) => {
                self.company.insert((), value.clone()).await;
                value
            }
            Err(e) => {
                warn!(error = %e, "failed to load company info, degrading to defaults");
                None
            }
        }
    }

    /// Per-page records are not cached; they are fetched once per page view.
    async fn page_seo(&self, path: &str) -> Option<PageSeo> {
        match PageSeo::find_by_path(&self.pool, path).await {
            Ok(record) => record,
            Err(e) => {
                warn!(path, error = %e, "failed to load page seo, degrading to site defaults");
                None
            }
        }
    }

    pub async fn resolve(&self, path: &str, overrides: &MetaOverrides) -> ResolvedMeta {
        let page = self.page_seo(path).await;
        let site = self.seo_settings().await;

        let title = first_non_empty([
            overrides.title.clone(),
            page.as_ref().and_then(|p| p.title.clone()),
            site.as_ref().map(|s| s.site_title.clone()),
        ])
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let description = first_non_empty([
            overrides.description.clone(),
            page.as_ref().and_then(|p| p.description.clone()),
            site.as_ref().and_then(|s| s.site_description.clone()),
        ])
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let keywords = first_non_empty([
            overrides.keywords.clone(),
            page.as_ref().and_then(|p| p.keywords.clone()),
            site.as_ref().and_then(|s| s.keywords.clone()),
        ])
        .unwrap_or_else(|| DEFAULT_KEYWORDS.to_string());

        let og_image = first_non_empty([
            overrides.og_image.clone(),
            page.as_ref().and_then(|p| p.og_image.clone()),
            site.as_ref().and_then(|s| s.og_image.clone()),
        ])
        .unwrap_or_else(|| DEFAULT_OG_IMAGE.to_string());

        let canonical_url = first_non_empty([
            overrides.canonical_url.clone(),
            page.as_ref().and_then(|p| p.canonical_url.clone()),
            site.as_ref()
                .and_then(|s| s.canonical_base.clone())
                .filter(|base| !base.is_empty())
                .map(|base| join_canonical(&base, path)),
        ])
        .unwrap_or_else(|| join_canonical(DEFAULT_CANONICAL_BASE, path));

        ResolvedMeta {
            title,
            description,
            keywords,
            og_image,
            canonical_url,
            analytics_id: site
                .as_ref()
                .and_then(|s| s.analytics_id.clone())
                .filter(|id| !id.is_empty()),
        }
    }
}

fn join_canonical(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_always_wins() {
        let resolved = first_non_empty([
            Some("Override".to_string()),
            Some("Page".to_string()),
            Some("Site".to_string()),
        ]);
        assert_eq!(resolved.as_deref(), Some("Override"));
    }

    #[test]
    fn empty_string_falls_through() {
        let resolved = first_non_empty([
            Some(String::new()),
            None,
            Some("Site".to_string()),
        ]);
        assert_eq!(resolved.as_deref(), Some("Site"));
    }

    #[test]
    fn all_sources_absent_yields_none() {
        assert_eq!(first_non_empty([None, Some(String::new()), None]), None);
    }

    #[test]
    fn canonical_join_avoids_double_slash() {
        assert_eq!(
            join_canonical("https://solarshine.example/", "/contact"),
            "https://solarshine.example/contact"
        );
        assert_eq!(
            join_canonical("https://solarshine.example", "/"),
            "https://solarshine.example/"
        );
    }
}
