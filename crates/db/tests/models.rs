use chrono::NaiveDate;
use db::{
    DBService,
    models::{
        appointment::{Appointment, AppointmentStatus, CreateAppointment},
        global_settings::{GlobalSettings, UpdateGlobalSettings},
        nav_item::{CreateNavItem, NavItem, UpdateNavItem},
        page_seo::{PageSeo, UpsertPageSeo},
        time_slot::TimeSlot,
    },
};
use sqlx::SqlitePool;
use uuid::Uuid;

async fn pool() -> SqlitePool {
    DBService::new_in_memory().await.unwrap().pool
}

fn global_settings(site_name: &str) -> UpdateGlobalSettings {
    UpdateGlobalSettings {
        site_name: site_name.to_string(),
        tagline: None,
        contact_email: None,
        contact_phone: None,
        address: None,
        facebook_url: None,
        instagram_url: None,
        linkedin_url: None,
        maintenance_mode: false,
        analytics_id: None,
    }
}

#[tokio::test]
async fn slot_upsert_keeps_a_single_row() {
    let pool = pool().await;
    assert!(GlobalSettings::load(&pool).await.unwrap().is_none());

    let first = GlobalSettings::upsert(&pool, &global_settings("Solar Shine"))
        .await
        .unwrap();
    let second = GlobalSettings::upsert(&pool, &global_settings("Solar Shine Energy"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    let loaded = GlobalSettings::load(&pool).await.unwrap().unwrap();
    assert_eq!(loaded.site_name, "Solar Shine Energy");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM global_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn nav_item_crud_round_trip() {
    let pool = pool().await;
    let created = NavItem::create(
        &pool,
        &CreateNavItem {
            title: "Home".to_string(),
            path: "/".to_string(),
        },
        Uuid::new_v4(),
        0,
    )
    .await
    .unwrap();
    assert_eq!(created.position, 0);

    let updated = NavItem::update(
        &pool,
        created.id,
        &UpdateNavItem {
            title: "Start".to_string(),
            path: "/".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Start");

    assert_eq!(NavItem::set_position(&pool, created.id, 4).await.unwrap(), 1);
    let found = NavItem::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.position, 4);

    assert_eq!(NavItem::delete(&pool, created.id).await.unwrap(), 1);
    assert!(NavItem::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn update_on_missing_nav_item_returns_none() {
    let pool = pool().await;
    let result = NavItem::update(
        &pool,
        Uuid::new_v4(),
        &UpdateNavItem {
            title: "x".to_string(),
            path: "/x".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn appointment_status_last_write_wins() {
    let pool = pool().await;
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
    let appointment = Appointment::create(
        &pool,
        &CreateAppointment {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0101".to_string(),
            service: "Residential solar".to_string(),
            requested_date: date,
            time_slot_id: None,
            message: None,
        },
        Uuid::new_v4(),
    )
    .await
    .unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Pending);

    // Confirm, cancel, confirm again. No transition is rejected.
    for status in [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Confirmed,
    ] {
        let rows = Appointment::update_status(&pool, appointment.id, status)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
    let found = Appointment::find_by_id(&pool, appointment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn page_seo_upsert_overwrites_by_path() {
    let pool = pool().await;
    let first = PageSeo::upsert(
        &pool,
        &UpsertPageSeo {
            page_path: "/contact".to_string(),
            title: Some("Contact us".to_string()),
            description: None,
            keywords: None,
            canonical_url: None,
            og_image: None,
        },
    )
    .await
    .unwrap();

    let second = PageSeo::upsert(
        &pool,
        &UpsertPageSeo {
            page_path: "/contact".to_string(),
            title: Some("Get a quote".to_string()),
            description: Some("Talk to an installer".to_string()),
            keywords: None,
            canonical_url: None,
            og_image: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(PageSeo::list(&pool).await.unwrap().len(), 1);
    let found = PageSeo::find_by_path(&pool, "/contact")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title.as_deref(), Some("Get a quote"));

    // Lookup is exact, no prefix matching.
    assert!(PageSeo::find_by_path(&pool, "/contact/form")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn time_slot_booking_flag_round_trip() {
    let pool = pool().await;
    let date = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
    let slot = TimeSlot::create(&pool, date, "09:00 - 11:00", Uuid::new_v4())
        .await
        .unwrap();
    assert!(!slot.booked);

    assert_eq!(TimeSlot::set_booked(&pool, slot.id, true).await.unwrap(), 1);
    let slots = TimeSlot::list_by_date(&pool, date).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert!(slots[0].booked);
}
