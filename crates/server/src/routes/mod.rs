use axum::Router;

use crate::AppState;

pub mod appointments;
pub mod blog;
pub mod contact;
pub mod footer_links;
pub mod navigation;
pub mod page_seo;
pub mod process_steps;
pub mod projects;
pub mod service_cards;
pub mod settings;
pub mod site;
pub mod specialized_areas;
pub mod testimonials;
pub mod uploads;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(site::router())
        .merge(navigation::router())
        .merge(process_steps::router())
        .merge(specialized_areas::router())
        .merge(footer_links::router())
        .merge(service_cards::router())
        .merge(page_seo::router())
        .merge(settings::router())
        .merge(appointments::router())
        .merge(contact::router())
        .merge(blog::router())
        .merge(projects::router())
        .merge(testimonials::router())
        .merge(uploads::router())
}
