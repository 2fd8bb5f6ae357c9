use db::{
    DBService,
    models::{
        page_seo::{PageSeo, UpsertPageSeo},
        seo_settings::{SeoSettings, UpdateSeoSettings},
    },
};
use services::services::content_resolver::{
    ContentResolver, DEFAULT_DESCRIPTION, DEFAULT_TITLE, MetaOverrides,
};
use sqlx::SqlitePool;

async fn pool() -> SqlitePool {
    DBService::new_in_memory().await.unwrap().pool
}

fn seo(site_title: &str) -> UpdateSeoSettings {
    UpdateSeoSettings {
        site_title: site_title.to_string(),
        site_description: None,
        keywords: None,
        og_image: None,
        canonical_base: Some("https://solarshine.example".to_string()),
        analytics_id: None,
    }
}

#[tokio::test]
async fn missing_page_record_falls_back_to_site_settings() {
    let pool = pool().await;
    SeoSettings::upsert(&pool, &seo("Solar Shine")).await.unwrap();

    let resolver = ContentResolver::new(pool);
    let meta = resolver.resolve("/contact", &MetaOverrides::default()).await;

    assert_eq!(meta.title, "Solar Shine");
    // Fields the site record leaves empty come from the hardcoded defaults.
    assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    assert_eq!(meta.canonical_url, "https://solarshine.example/contact");
}

#[tokio::test]
async fn empty_database_resolves_to_hardcoded_defaults() {
    let resolver = ContentResolver::new(pool().await);
    let meta = resolver.resolve("/", &MetaOverrides::default()).await;
    assert_eq!(meta.title, DEFAULT_TITLE);
    assert_eq!(meta.analytics_id, None);
}

#[tokio::test]
async fn page_record_beats_site_settings_and_override_beats_both() {
    let pool = pool().await;
    SeoSettings::upsert(&pool, &seo("Solar Shine")).await.unwrap();
    PageSeo::upsert(
        &pool,
        &UpsertPageSeo {
            page_path: "/about".to_string(),
            title: Some("About Solar Shine".to_string()),
            description: None,
            keywords: None,
            canonical_url: None,
            og_image: None,
        },
    )
    .await
    .unwrap();

    let resolver = ContentResolver::new(pool);
    let meta = resolver.resolve("/about", &MetaOverrides::default()).await;
    assert_eq!(meta.title, "About Solar Shine");

    let overridden = resolver
        .resolve(
            "/about",
            &MetaOverrides {
                title: Some("Campaign landing".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(overridden.title, "Campaign landing");
}

#[tokio::test]
async fn empty_page_title_falls_through_to_site_title() {
    let pool = pool().await;
    SeoSettings::upsert(&pool, &seo("Solar Shine")).await.unwrap();
    PageSeo::upsert(
        &pool,
        &UpsertPageSeo {
            page_path: "/services".to_string(),
            title: Some(String::new()),
            description: None,
            keywords: None,
            canonical_url: None,
            og_image: None,
        },
    )
    .await
    .unwrap();

    let resolver = ContentResolver::new(pool);
    let meta = resolver.resolve("/services", &MetaOverrides::default()).await;
    assert_eq!(meta.title, "Solar Shine");
}

#[tokio::test]
async fn invalidate_drops_the_cached_site_record() {
    let pool = pool().await;
    SeoSettings::upsert(&pool, &seo("Solar Shine")).await.unwrap();

    let resolver = ContentResolver::new(pool.clone());
    assert_eq!(
        resolver.resolve("/", &MetaOverrides::default()).await.title,
        "Solar Shine"
    );

    SeoSettings::upsert(&pool, &seo("Solar Shine Energy"))
        .await
        .unwrap();
    // Still cached until an explicit invalidation.
    assert_eq!(
        resolver.resolve("/", &MetaOverrides::default()).await.title,
        "Solar Shine"
    );

    resolver.invalidate();
    assert_eq!(
        resolver.resolve("/", &MetaOverrides::default()).await.title,
        "Solar Shine Energy"
    );
}
