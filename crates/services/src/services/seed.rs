//! Default content for a fresh database. Runs at startup and is a no-op once
//! global settings exist, so it is safe to call on every boot.

use chrono::{Days, Utc};
use db::models::{
    company_info::{CompanyInfo, UpdateCompanyInfo},
    footer_link::{CreateFooterLink, FooterLink},
    global_settings::{GlobalSettings, UpdateGlobalSettings},
    hero_section::{HeroSection, UpdateHeroSection},
    nav_item::{CreateNavItem, NavItem},
    process_step::{CreateProcessStep, ProcessStep},
    service_card::{CreateServiceCard, ServiceCard},
    time_slot::TimeSlot,
};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

const SLOT_LABELS: [&str; 3] = ["09:00 - 11:00", "11:00 - 13:00", "14:00 - 16:00"];

pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    if GlobalSettings::load(pool).await?.is_some() {
        return Ok(false);
    }
    info!("empty database, seeding default content");

    GlobalSettings::upsert(
        pool,
        &UpdateGlobalSettings {
            site_name: "Solar Shine".to_string(),
            tagline: Some("Clean energy for every roof".to_string()),
            contact_email: Some("info@solarshine.example".to_string()),
            contact_phone: Some("+1 555 0100".to_string()),
            address: Some("12 Sunway Drive".to_string()),
            facebook_url: None,
            instagram_url: None,
            linkedin_url: None,
            maintenance_mode: false,
            analytics_id: None,
        },
    )
    .await?;

    CompanyInfo::upsert(
        pool,
        &UpdateCompanyInfo {
            name: "Solar Shine".to_string(),
            about: Some(
                "Residential and commercial solar design, installation and maintenance."
                    .to_string(),
            ),
            phone: Some("+1 555 0100".to_string()),
            email: Some("info@solarshine.example".to_string()),
            address: Some("12 Sunway Drive".to_string()),
            founded_year: Some(2012),
            logo_file_id: None,
            certifications: Some("NABCEP certified".to_string()),
        },
    )
    .await?;

    HeroSection::upsert(
        pool,
        &UpdateHeroSection {
            heading: "Power your home with sunshine".to_string(),
            subheading: Some("Turnkey solar systems, from survey to grid connection".to_string()),
            cta_label: Some("Book a free survey".to_string()),
            cta_url: Some("/contact".to_string()),
            background_image_file_id: None,
        },
    )
    .await?;

    let nav = [
        ("Home", "/"),
        ("About", "/about"),
        ("Services", "/services"),
        ("Projects", "/projects"),
        ("Blog", "/blog"),
        ("Contact", "/contact"),
    ];
    for (position, (title, path)) in nav.iter().enumerate() {
        NavItem::create(
            pool,
            &CreateNavItem {
                title: title.to_string(),
                path: path.to_string(),
            },
            Uuid::new_v4(),
            position as i64,
        )
        .await?;
    }

    let steps = [
        ("Site survey", "We assess your roof, shading and consumption."),
        ("System design", "A tailored layout with yield and payback estimates."),
        ("Installation", "Certified crews install panels, inverter and wiring."),
        ("Commissioning", "Grid connection, monitoring setup and handover."),
    ];
    for (position, (name, description)) in steps.iter().enumerate() {
        ProcessStep::create(
            pool,
            &CreateProcessStep {
                name: name.to_string(),
                description: Some(description.to_string()),
            },
            Uuid::new_v4(),
            position as i64,
        )
        .await?;
    }

    let links = [
        ("Privacy policy", "/privacy"),
        ("Terms of service", "/terms"),
    ];
    for (position, (label, url)) in links.iter().enumerate() {
        FooterLink::create(
            pool,
            &CreateFooterLink {
                label: label.to_string(),
                url: url.to_string(),
            },
            Uuid::new_v4(),
            position as i64,
        )
        .await?;
    }

    let cards = [
        ("Residential solar", "Rooftop systems sized for your household."),
        ("Commercial solar", "Reduce operating costs with large-scale PV."),
        ("Maintenance", "Inspection, cleaning and inverter servicing."),
    ];
    for (position, (title, summary)) in cards.iter().enumerate() {
        ServiceCard::create(
            pool,
            &CreateServiceCard {
                title: title.to_string(),
                summary: Some(summary.to_string()),
                icon: None,
            },
            Uuid::new_v4(),
            position as i64,
        )
        .await?;
    }

    let today = Utc::now().date_naive();
    for offset in 1..=7u64 {
        let date = today + Days::new(offset);
        for label in SLOT_LABELS {
            TimeSlot::create(pool, date, label, Uuid::new_v4()).await?;
        }
    }

    Ok(true)
}
