use std::{env, path::PathBuf, sync::Arc};

use axum::Router;
use db::DBService;
use services::services::{
    appointments::AppointmentService,
    contact::{ContactService, ResendSender},
    content_resolver::ContentResolver,
    settings::SettingsService,
    storage::FileStorage,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod routes;

/// Environment-driven configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub resend_api_key: Option<String>,
    pub contact_from: String,
    pub contact_to: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://suncore.db".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            contact_from: env::var("CONTACT_FROM")
                .unwrap_or_else(|_| "website@solarshine.example".to_string()),
            contact_to: env::var("CONTACT_TO")
                .unwrap_or_else(|_| "info@solarshine.example".to_string()),
        }
    }
}

/// Explicitly constructed application state; services are built once here and
/// injected into handlers, no ambient singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
    pub resolver: Arc<ContentResolver>,
    pub settings: Arc<SettingsService>,
    pub appointments: Arc<AppointmentService>,
    pub contact: Arc<ContactService>,
    pub storage: Arc<FileStorage>,
}

impl AppState {
    pub fn new(config: &Config, db: DBService) -> Self {
        let storage = Arc::new(FileStorage::new(config.upload_dir.clone()));
        let resolver = Arc::new(ContentResolver::new(db.pool.clone()));
        let settings = Arc::new(SettingsService::new(
            db.pool.clone(),
            storage.clone(),
            resolver.clone(),
        ));
        let appointments = Arc::new(AppointmentService::new(db.pool.clone()));
        let primary = config.resend_api_key.clone().map(|key| {
            Arc::new(ResendSender::new(
                key,
                config.contact_from.clone(),
                config.contact_to.clone(),
            )) as Arc<dyn services::services::contact::EmailSender>
        });
        let contact = Arc::new(ContactService::new(primary, config.contact_to.clone()));
        Self {
            db,
            resolver,
            settings,
            appointments,
            contact,
            storage,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
